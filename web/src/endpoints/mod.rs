/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod driver;
pub mod pricing;
pub mod rides;
pub mod user;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use drivemate_core::types::BaseResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Route")
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}
