/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{encode_jwt, update_last_login};
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{NaiveDate, Utc};
use drivemate_core::consts::*;
use drivemate_core::database::get_profile_by_email;
use drivemate_core::input::*;
use drivemate_core::types::*;
use entity::driver_profile::VerificationStatus;
use entity::profile::Role;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DriverDetails {
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
    pub vehicle_type: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<i32>,
    pub vehicle_color: Option<String>,
    pub vehicle_plate: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeSignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub driver: Option<DriverDetails>,
}

fn default_role() -> Role {
    Role::Customer
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub token: String,
    pub profile: MProfile,
}

struct ValidSignup {
    email: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    driver: Option<DriverDetails>,
}

fn validate_vehicle_year(year: Option<i32>) -> WebResult<Option<i32>> {
    match year {
        Some(y) if !(1950..=2100).contains(&y) => Err(WebError::BadRequest("Invalid vehicle year")),
        _ => Ok(year),
    }
}

pub(crate) fn validate_driver_details(details: &DriverDetails) -> WebResult<DriverDetails> {
    let field = |name: &'static str, value: &Option<String>| {
        optional_text(name, value.as_deref(), MAX_NAME_LENGTH)
    };

    Ok(DriverDetails {
        license_number: validate_text("License number", &details.license_number, MAX_NAME_LENGTH)?,
        license_expiry: details.license_expiry,
        vehicle_type: field("Vehicle type", &details.vehicle_type)?,
        vehicle_make: field("Vehicle make", &details.vehicle_make)?,
        vehicle_model: field("Vehicle model", &details.vehicle_model)?,
        vehicle_year: validate_vehicle_year(details.vehicle_year)?,
        vehicle_color: field("Vehicle color", &details.vehicle_color)?,
        vehicle_plate: field("Vehicle plate", &details.vehicle_plate)?,
    })
}

fn validate_signup(body: &MakeSignupRequest) -> WebResult<ValidSignup> {
    validate_password(&body.password)?;
    let email = normalize_email(&body.email)?;
    let first_name = validate_name("First name", &body.first_name)?;
    let last_name = validate_name("Last name", &body.last_name)?;

    let phone_number = match body.phone_number.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => validate_phone(p)?,
        _ => String::new(),
    };

    let driver = match body.role {
        Role::Admin => {
            return Err(WebError::BadRequest("Admin accounts cannot be registered"));
        }
        Role::Driver => {
            let details = body
                .driver
                .as_ref()
                .ok_or(WebError::BadRequest("Driver details are required"))?;
            Some(validate_driver_details(details)?)
        }
        Role::Customer => None,
    };

    Ok(ValidSignup {
        email,
        first_name,
        last_name,
        phone_number,
        driver,
    })
}

pub async fn post_signup(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeSignupRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<SessionResponse>>> {
    let Json(body) = body?;

    if state.cli.disable_registration {
        return Err(WebError::RegistrationDisabled);
    }

    let signup = validate_signup(&body)?;

    if get_profile_by_email(Arc::clone(&state), &signup.email)
        .await?
        .is_some()
    {
        return Err(WebError::AlreadyExists("Account"));
    }

    let now = Utc::now().naive_utc();
    let profile_id = Uuid::new_v4();

    let aprofile = AProfile {
        id: Set(profile_id),
        email: Set(signup.email),
        password: Set(generate_hash(&body.password)),
        first_name: Set(signup.first_name),
        last_name: Set(signup.last_name),
        phone_number: Set(signup.phone_number),
        role: Set(body.role),
        email_notifications: Set(true),
        sms_notifications: Set(false),
        ride_updates: Set(true),
        promotions: Set(false),
        last_login_at: Set(now),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let txn = state.db.begin().await?;
    let profile = aprofile
        .insert(&txn)
        .await
        .map_err(WebError::duplicate("Account"))?;

    if let Some(details) = signup.driver {
        let adriver = ADriverProfile {
            id: Set(profile_id),
            license_number: Set(details.license_number),
            license_expiry: Set(details.license_expiry),
            vehicle_type: Set(details.vehicle_type),
            vehicle_make: Set(details.vehicle_make),
            vehicle_model: Set(details.vehicle_model),
            vehicle_year: Set(details.vehicle_year),
            vehicle_color: Set(details.vehicle_color),
            vehicle_plate: Set(details.vehicle_plate),
            verification: Set(VerificationStatus::Pending),
            is_online: Set(false),
            rating: Set(0.0),
            rating_count: Set(0),
            total_rides: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        adriver.insert(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!(profile = %profile.id, role = %profile.role, "registered profile");

    let token = encode_jwt(&state, profile.id).map_err(WebError::TokenGeneration)?;

    let res = BaseResponse {
        error: false,
        message: SessionResponse { token, profile },
    };

    Ok(Json(res))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<SessionResponse>>> {
    let Json(body) = body?;

    let email = normalize_email(&body.email).map_err(|_| WebError::InvalidCredentials)?;

    let profile = get_profile_by_email(Arc::clone(&state), &email)
        .await?
        .ok_or(WebError::InvalidCredentials)?;

    verify_password(&body.password, &profile.password)
        .map_err(|_| WebError::InvalidCredentials)?;

    let token = encode_jwt(&state, profile.id).map_err(WebError::TokenGeneration)?;

    let profile = update_last_login(&state, profile).await?;

    let res = BaseResponse {
        error: false,
        message: SessionResponse { token, profile },
    };

    Ok(Json(res))
}

/// Tokens are stateless; the client discards its copy.
pub async fn post_logout() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "Logged out".to_string(),
    };

    Ok(Json(res))
}
