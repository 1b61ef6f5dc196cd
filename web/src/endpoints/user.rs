/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use chrono::Utc;
use drivemate_core::database::get_driver_profile;
use drivemate_core::input::{validate_name, validate_phone};
use drivemate_core::types::*;
use entity::profile::Role;
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub profile: MProfile,
    pub driver: Option<MDriverProfile>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub ride_updates: Option<bool>,
    pub promotions: Option<bool>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
) -> WebResult<Json<BaseResponse<ProfileResponse>>> {
    let driver = if profile.role == Role::Driver {
        get_driver_profile(Arc::clone(&state), profile.id).await?
    } else {
        None
    };

    let res = BaseResponse {
        error: false,
        message: ProfileResponse { profile, driver },
    };

    Ok(Json(res))
}

pub async fn patch(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    body: Result<Json<PatchProfileRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MProfile>>> {
    let Json(body) = body?;
    let mut aprofile: AProfile = profile.into();

    if let Some(first_name) = body.first_name {
        aprofile.first_name = Set(validate_name("First name", &first_name)?);
    }

    if let Some(last_name) = body.last_name {
        aprofile.last_name = Set(validate_name("Last name", &last_name)?);
    }

    if let Some(phone_number) = body.phone_number {
        let phone_number = if phone_number.trim().is_empty() {
            String::new()
        } else {
            validate_phone(&phone_number)?
        };
        aprofile.phone_number = Set(phone_number);
    }

    if let Some(v) = body.email_notifications {
        aprofile.email_notifications = Set(v);
    }

    if let Some(v) = body.sms_notifications {
        aprofile.sms_notifications = Set(v);
    }

    if let Some(v) = body.ride_updates {
        aprofile.ride_updates = Set(v);
    }

    if let Some(v) = body.promotions {
        aprofile.promotions = Set(v);
    }

    aprofile.updated_at = Set(Utc::now().naive_utc());
    let profile = aprofile.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: profile,
    };

    Ok(Json(res))
}
