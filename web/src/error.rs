/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use drivemate_core::input::InputError;
use drivemate_core::types::BaseResponse;
use entity::profile::Role;
use entity::ride::RideStatus;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("Registration is disabled")]
    RegistrationDisabled,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Missing authorization token")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Not available for {0} accounts")]
    RoleNotAllowed(Role),
    #[error("Driver account is not approved yet")]
    DriverNotApproved,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0} already exists")]
    AlreadyExists(&'static str),
    #[error("Cannot {action} a ride that is {status}")]
    InvalidTransition {
        status: RideStatus,
        action: &'static str,
    },
    #[error("{0}")]
    Conflict(&'static str),
    #[error("Failed to generate token")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Invalid JSON: {0}")]
    Json(#[from] JsonRejection),
    #[error("Database error")]
    Database(#[from] DbErr),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn invalid_transition(status: RideStatus, action: &'static str) -> Self {
        WebError::InvalidTransition { status, action }
    }

    /// For inserts guarded by a unique index: a lost race reports the
    /// duplicate instead of a database failure.
    pub fn duplicate(resource: &'static str) -> impl FnOnce(DbErr) -> WebError {
        move |err| {
            let sql_err = err.sql_err();
            WebError::from_sql_err(resource, sql_err, err)
        }
    }

    pub(crate) fn from_sql_err(resource: &'static str, sql_err: Option<SqlErr>, err: DbErr) -> Self {
        match sql_err {
            Some(SqlErr::UniqueConstraintViolation(_)) => WebError::AlreadyExists(resource),
            _ => WebError::Database(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_)
            | WebError::RegistrationDisabled
            | WebError::Input(_)
            | WebError::Json(_) => StatusCode::BAD_REQUEST,
            WebError::InvalidCredentials | WebError::MissingToken | WebError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            WebError::RoleNotAllowed(_) | WebError::DriverNotApproved => StatusCode::FORBIDDEN,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::AlreadyExists(_)
            | WebError::InvalidTransition { .. }
            | WebError::Conflict(_) => StatusCode::CONFLICT,
            WebError::TokenGeneration(_) | WebError::Database(_) | WebError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::TokenGeneration(err) => tracing::error!("Token generation failed: {}", err),
            WebError::Database(err) => tracing::error!("Database error: {}", err),
            WebError::Internal(err) => tracing::error!("Internal error: {:#}", err),
            _ => {}
        }

        let body = Json(BaseResponse {
            error: true,
            message: self.to_string(),
        });

        (self.status(), body).into_response()
    }
}
