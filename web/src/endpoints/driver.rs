/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::auth::{DriverDetails, validate_driver_details};
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use drivemate_core::database::{get_driver_profile, get_open_requests, get_visible_ride};
use drivemate_core::types::*;
use entity::ride::{PaymentStatus, RideStatus};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeStatusRequest {
    pub online: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CompletionResponse {
    pub ride: MRide,
    pub payment: MPayment,
}

async fn current_driver(state: &State<Arc<ServerState>>, profile: &MProfile) -> WebResult<MDriverProfile> {
    get_driver_profile(Arc::clone(state), profile.id)
        .await?
        .ok_or(WebError::NotFound("Driver profile"))
}

async fn assigned_ride(
    state: &State<Arc<ServerState>>,
    profile: &MProfile,
    ride_id: Uuid,
) -> WebResult<MRide> {
    get_visible_ride(Arc::clone(state), profile, ride_id)
        .await?
        .ok_or(WebError::NotFound("Ride"))
}

pub async fn get_profile(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
) -> WebResult<Json<BaseResponse<MDriverProfile>>> {
    let driver = current_driver(&state, &profile).await?;

    let res = BaseResponse {
        error: false,
        message: driver,
    };

    Ok(Json(res))
}

pub async fn patch_profile(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    body: Result<Json<DriverDetails>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MDriverProfile>>> {
    let Json(body) = body?;
    let details = validate_driver_details(&body)?;
    let driver = current_driver(&state, &profile).await?;

    let mut adriver: ADriverProfile = driver.into();
    adriver.license_number = Set(details.license_number);
    adriver.license_expiry = Set(details.license_expiry);
    adriver.vehicle_type = Set(details.vehicle_type);
    adriver.vehicle_make = Set(details.vehicle_make);
    adriver.vehicle_model = Set(details.vehicle_model);
    adriver.vehicle_year = Set(details.vehicle_year);
    adriver.vehicle_color = Set(details.vehicle_color);
    adriver.vehicle_plate = Set(details.vehicle_plate);
    adriver.updated_at = Set(Utc::now().naive_utc());
    let driver = adriver.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: driver,
    };

    Ok(Json(res))
}

pub async fn post_status(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    body: Result<Json<MakeStatusRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MDriverProfile>>> {
    let Json(body) = body?;
    let driver = current_driver(&state, &profile).await?;

    let mut adriver: ADriverProfile = driver.into();
    adriver.is_online = Set(body.online);
    adriver.updated_at = Set(Utc::now().naive_utc());
    let driver = adriver.update(&state.db).await?;

    tracing::info!(driver = %profile.id, online = driver.is_online, "driver status changed");

    let res = BaseResponse {
        error: false,
        message: driver,
    };

    Ok(Json(res))
}

pub async fn get_requests(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
) -> WebResult<Json<BaseResponse<Vec<MRide>>>> {
    let driver = current_driver(&state, &profile).await?;

    let requests = if driver.is_online {
        get_open_requests(Arc::clone(&state)).await?
    } else {
        Vec::new()
    };

    let res = BaseResponse {
        error: false,
        message: requests,
    };

    Ok(Json(res))
}

pub async fn post_ride_accept(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MRide>>> {
    let driver = current_driver(&state, &profile).await?;

    if !driver.is_approved() {
        return Err(WebError::DriverNotApproved);
    }

    if !driver.is_online {
        return Err(WebError::BadRequest("Go online to accept rides"));
    }

    let now = Utc::now().naive_utc();
    let result = ERide::update_many()
        .col_expr(CRide::Status, Expr::value(RideStatus::Accepted))
        .col_expr(CRide::DriverId, Expr::value(profile.id))
        .col_expr(CRide::UpdatedAt, Expr::value(now))
        .filter(CRide::Id.eq(ride_id))
        .filter(CRide::Status.eq(RideStatus::Pending))
        .filter(CRide::DriverId.is_null())
        .exec(&state.db)
        .await?;

    let ride = ERide::find_by_id(ride_id)
        .one(&state.db)
        .await?
        .ok_or(WebError::NotFound("Ride"))?;

    if result.rows_affected == 0 {
        return Err(WebError::Conflict("Ride is no longer available"));
    }

    tracing::info!(ride = %ride.id, driver = %profile.id, "accepted ride");

    let res = BaseResponse {
        error: false,
        message: ride,
    };

    Ok(Json(res))
}

/// An accepted ride goes back to the pool; declining an open request changes nothing.
pub async fn post_ride_decline(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MRide>>> {
    let ride = ERide::find_by_id(ride_id)
        .one(&state.db)
        .await?
        .ok_or(WebError::NotFound("Ride"))?;

    match (ride.status, ride.driver_id) {
        (RideStatus::Pending, None) => {
            let res = BaseResponse {
                error: false,
                message: ride,
            };

            Ok(Json(res))
        }
        (RideStatus::Accepted, Some(driver_id)) if driver_id == profile.id => {
            let now = Utc::now().naive_utc();
            let result = ERide::update_many()
                .col_expr(CRide::Status, Expr::value(RideStatus::Pending))
                .col_expr(CRide::DriverId, Expr::value(Option::<Uuid>::None))
                .col_expr(CRide::UpdatedAt, Expr::value(now))
                .filter(CRide::Id.eq(ride.id))
                .filter(CRide::Status.eq(RideStatus::Accepted))
                .filter(CRide::DriverId.eq(profile.id))
                .exec(&state.db)
                .await?;

            if result.rows_affected == 0 {
                return Err(WebError::invalid_transition(ride.status, "decline"));
            }

            tracing::info!(ride = %ride.id, driver = %profile.id, "released ride");

            let res = BaseResponse {
                error: false,
                message: MRide {
                    status: RideStatus::Pending,
                    driver_id: None,
                    updated_at: now,
                    ..ride
                },
            };

            Ok(Json(res))
        }
        (RideStatus::Pending, Some(_)) | (RideStatus::Accepted, _) => {
            Err(WebError::NotFound("Ride"))
        }
        (status, _) => Err(WebError::invalid_transition(status, "decline")),
    }
}

pub async fn post_ride_start(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MRide>>> {
    let ride = assigned_ride(&state, &profile, ride_id).await?;

    if !ride.status.can_transition_to(RideStatus::InProgress) {
        return Err(WebError::invalid_transition(ride.status, "start"));
    }

    let now = Utc::now().naive_utc();
    let result = ERide::update_many()
        .col_expr(CRide::Status, Expr::value(RideStatus::InProgress))
        .col_expr(CRide::ActualPickupTime, Expr::value(now))
        .col_expr(CRide::UpdatedAt, Expr::value(now))
        .filter(CRide::Id.eq(ride.id))
        .filter(CRide::DriverId.eq(profile.id))
        .filter(CRide::Status.eq(RideStatus::Accepted))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(WebError::invalid_transition(ride.status, "start"));
    }

    tracing::info!(ride = %ride.id, driver = %profile.id, "started ride");

    let res = BaseResponse {
        error: false,
        message: MRide {
            status: RideStatus::InProgress,
            actual_pickup_time: Some(now),
            updated_at: now,
            ..ride
        },
    };

    Ok(Json(res))
}

pub async fn post_ride_complete(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<CompletionResponse>>> {
    let ride = assigned_ride(&state, &profile, ride_id).await?;

    if !ride.status.can_transition_to(RideStatus::Completed) {
        return Err(WebError::invalid_transition(ride.status, "complete"));
    }

    let now = Utc::now().naive_utc();
    let final_price = ride.estimated_price;
    let txn = state.db.begin().await?;

    let result = ERide::update_many()
        .col_expr(CRide::Status, Expr::value(RideStatus::Completed))
        .col_expr(CRide::ActualDropoffTime, Expr::value(now))
        .col_expr(CRide::FinalPrice, Expr::value(final_price))
        .col_expr(CRide::UpdatedAt, Expr::value(now))
        .filter(CRide::Id.eq(ride.id))
        .filter(CRide::DriverId.eq(profile.id))
        .filter(CRide::Status.eq(RideStatus::InProgress))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        txn.rollback().await?;
        return Err(WebError::invalid_transition(ride.status, "complete"));
    }

    let payment = APayment {
        id: Set(Uuid::new_v4()),
        ride_id: Set(ride.id),
        amount: Set(final_price),
        currency: Set(state.cli.currency.clone()),
        payment_method: Set(None),
        status: Set(PaymentStatus::Pending),
        transaction_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    EDriverProfile::update_many()
        .col_expr(
            CDriverProfile::TotalRides,
            Expr::col(CDriverProfile::TotalRides).add(1),
        )
        .col_expr(CDriverProfile::UpdatedAt, Expr::value(now))
        .filter(CDriverProfile::Id.eq(profile.id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(ride = %ride.id, driver = %profile.id, amount = final_price, "completed ride");

    let res = BaseResponse {
        error: false,
        message: CompletionResponse {
            ride: MRide {
                status: RideStatus::Completed,
                final_price: Some(final_price),
                actual_dropoff_time: Some(now),
                updated_at: now,
                ..ride
            },
            payment,
        },
    };

    Ok(Json(res))
}
