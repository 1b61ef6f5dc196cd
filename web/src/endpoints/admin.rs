/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use drivemate_core::database::{get_admin_stats, get_pending_drivers, get_rides_for};
use drivemate_core::types::*;
use entity::driver_profile::VerificationStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct DriverApplication {
    pub profile: MProfile,
    pub driver: MDriverProfile,
}

pub(crate) async fn driver_applications(
    state: &State<Arc<ServerState>>,
) -> WebResult<Vec<DriverApplication>> {
    Ok(get_pending_drivers(Arc::clone(state))
        .await?
        .into_iter()
        .filter_map(|(driver, profile)| profile.map(|profile| DriverApplication { profile, driver }))
        .collect())
}

pub async fn get_stats(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<AdminStats>>> {
    let stats = get_admin_stats(Arc::clone(&state)).await?;

    let res = BaseResponse {
        error: false,
        message: stats,
    };

    Ok(Json(res))
}

pub async fn get_users(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<Vec<MProfile>>>> {
    let profiles = EProfile::find()
        .order_by_desc(CProfile::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: profiles,
    };

    Ok(Json(res))
}

pub async fn get_rides(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
) -> WebResult<Json<BaseResponse<Vec<MRide>>>> {
    let rides = get_rides_for(Arc::clone(&state), &profile).await?;

    let res = BaseResponse {
        error: false,
        message: rides,
    };

    Ok(Json(res))
}

pub async fn get_pending(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<DriverApplication>>>> {
    let applications = driver_applications(&state).await?;

    let res = BaseResponse {
        error: false,
        message: applications,
    };

    Ok(Json(res))
}

async fn set_verification(
    state: &State<Arc<ServerState>>,
    admin: &MProfile,
    driver_id: Uuid,
    verification: VerificationStatus,
) -> WebResult<MDriverProfile> {
    let driver = EDriverProfile::find_by_id(driver_id)
        .one(&state.db)
        .await?
        .ok_or(WebError::NotFound("Driver"))?;

    let mut adriver: ADriverProfile = driver.into();
    adriver.verification = Set(verification);
    if verification == VerificationStatus::Rejected {
        adriver.is_online = Set(false);
    }
    adriver.updated_at = Set(Utc::now().naive_utc());
    let driver = adriver.update(&state.db).await?;

    tracing::info!(driver = %driver_id, admin = %admin.id, verification = ?verification, "driver verification changed");

    Ok(driver)
}

pub async fn post_driver_approve(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(driver_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MDriverProfile>>> {
    let driver = set_verification(&state, &profile, driver_id, VerificationStatus::Approved).await?;

    let res = BaseResponse {
        error: false,
        message: driver,
    };

    Ok(Json(res))
}

pub async fn post_driver_reject(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(driver_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MDriverProfile>>> {
    let driver = set_verification(&state, &profile, driver_id, VerificationStatus::Rejected).await?;

    let res = BaseResponse {
        error: false,
        message: driver,
    };

    Ok(Json(res))
}
