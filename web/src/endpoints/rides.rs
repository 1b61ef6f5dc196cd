/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use drivemate_core::consts::MAX_INSTRUCTIONS_LENGTH;
use drivemate_core::database::{get_rides_for, get_visible_ride};
use drivemate_core::input::{optional_text, validate_rating};
use drivemate_core::rides::{BookingRequest, validate_booking};
use drivemate_core::types::*;
use entity::ride::RideStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeRatingRequest {
    pub rating: i32,
    pub comment: Option<String>,
}

pub async fn get(
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

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MRide>>> {
    let Json(body) = body?;
    let now = Utc::now().naive_utc();

    let booking = validate_booking(&state.cli.rate_card(), &body, now)?;
    let ride = booking
        .into_active_model(profile.id, now)
        .insert(&state.db)
        .await?;

    tracing::info!(ride = %ride.id, customer = %profile.id, price = ride.estimated_price, "booked ride");

    let res = BaseResponse {
        error: false,
        message: ride,
    };

    Ok(Json(res))
}

pub async fn get_ride(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MRide>>> {
    let ride = get_visible_ride(Arc::clone(&state), &profile, ride_id)
        .await?
        .ok_or(WebError::NotFound("Ride"))?;

    let res = BaseResponse {
        error: false,
        message: ride,
    };

    Ok(Json(res))
}

pub async fn post_ride_cancel(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MRide>>> {
    let ride = get_visible_ride(Arc::clone(&state), &profile, ride_id)
        .await?
        .ok_or(WebError::NotFound("Ride"))?;

    if !ride.status.can_transition_to(RideStatus::Cancelled) {
        return Err(WebError::invalid_transition(ride.status, "cancel"));
    }

    let now = Utc::now().naive_utc();
    let result = ERide::update_many()
        .col_expr(CRide::Status, Expr::value(RideStatus::Cancelled))
        .col_expr(CRide::UpdatedAt, Expr::value(now))
        .filter(CRide::Id.eq(ride.id))
        .filter(CRide::Status.eq(ride.status))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(WebError::Conflict("Ride changed while cancelling, please retry"));
    }

    tracing::info!(ride = %ride.id, customer = %profile.id, "cancelled ride");

    let res = BaseResponse {
        error: false,
        message: MRide {
            status: RideStatus::Cancelled,
            updated_at: now,
            ..ride
        },
    };

    Ok(Json(res))
}

pub async fn post_ride_rating(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
    body: Result<Json<MakeRatingRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MRating>>> {
    let Json(body) = body?;
    validate_rating(body.rating)?;
    let comment = optional_text("Comment", body.comment.as_deref(), MAX_INSTRUCTIONS_LENGTH)?;

    let ride = get_visible_ride(Arc::clone(&state), &profile, ride_id)
        .await?
        .ok_or(WebError::NotFound("Ride"))?;

    if ride.status != RideStatus::Completed {
        return Err(WebError::Conflict("Only completed rides can be rated"));
    }

    let driver_id = ride
        .driver_id
        .ok_or(WebError::BadRequest("Ride has no driver to rate"))?;

    let existing = ERating::find()
        .filter(CRating::RideId.eq(ride.id))
        .filter(CRating::RatingBy.eq(profile.id))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(WebError::AlreadyExists("Rating"));
    }

    let now = Utc::now().naive_utc();
    let txn = state.db.begin().await?;

    let rating = ARating {
        id: Set(Uuid::new_v4()),
        ride_id: Set(ride.id),
        rating_by: Set(profile.id),
        rating_for: Set(driver_id),
        rating: Set(body.rating),
        comment: Set(comment),
        created_at: Set(now),
    }
    .insert(&txn)
    .await
    .map_err(WebError::duplicate("Rating"))?;

    // Both expressions read the row as it was before this update.
    EDriverProfile::update_many()
        .col_expr(
            CDriverProfile::Rating,
            Expr::col(CDriverProfile::Rating)
                .mul(Expr::col(CDriverProfile::RatingCount))
                .add(body.rating)
                .div(Expr::col(CDriverProfile::RatingCount).add(1)),
        )
        .col_expr(
            CDriverProfile::RatingCount,
            Expr::col(CDriverProfile::RatingCount).add(1),
        )
        .col_expr(CDriverProfile::UpdatedAt, Expr::value(now))
        .filter(CDriverProfile::Id.eq(driver_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(ride = %ride.id, driver = %driver_id, rating = body.rating, "rated ride");

    let res = BaseResponse {
        error: false,
        message: rating,
    };

    Ok(Json(res))
}

pub async fn get_ride_payment(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
    Path(ride_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MPayment>>> {
    let ride = get_visible_ride(Arc::clone(&state), &profile, ride_id)
        .await?
        .ok_or(WebError::NotFound("Ride"))?;

    let payment = EPayment::find()
        .filter(CPayment::RideId.eq(ride.id))
        .one(&state.db)
        .await?
        .ok_or(WebError::NotFound("Payment"))?;

    let res = BaseResponse {
        error: false,
        message: payment,
    };

    Ok(Json(res))
}
