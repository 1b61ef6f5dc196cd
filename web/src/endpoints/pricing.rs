/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use drivemate_core::pricing::{ServiceOffer, billed_hours, estimate_price, service_catalog};
use drivemate_core::types::*;
use entity::ride::ServiceType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct PricingResponse {
    pub currency: String,
    pub services: Vec<ServiceOffer>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EstimateRequest {
    pub service_type: ServiceType,
    pub duration_hours: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EstimateResponse {
    pub service_type: ServiceType,
    pub hours: Option<i32>,
    pub estimated_price: i64,
    pub currency: String,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<PricingResponse>>> {
    let res = BaseResponse {
        error: false,
        message: PricingResponse {
            currency: state.cli.currency.clone(),
            services: service_catalog(&state.cli.rate_card()),
        },
    };

    Ok(Json(res))
}

pub async fn post_estimate(
    state: State<Arc<ServerState>>,
    body: Result<Json<EstimateRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<EstimateResponse>>> {
    let Json(body) = body?;
    let card = state.cli.rate_card();

    let res = BaseResponse {
        error: false,
        message: EstimateResponse {
            service_type: body.service_type,
            hours: billed_hours(body.service_type, body.duration_hours),
            estimated_price: estimate_price(&card, body.service_type, body.duration_hours),
            currency: state.cli.currency.clone(),
        },
    };

    Ok(Json(res))
}
