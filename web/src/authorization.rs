/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use anyhow::{Context, Result};
use axum::extract::{Extension, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use drivemate_core::permission::{AccessList, has_access};
use drivemate_core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let mut parts = header.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token.to_string()),
        _ => None,
    }
}

/// Resolves the bearer token to a profile and stores it as a request extension.
pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response> {
    let token = bearer_token(req.headers()).ok_or(WebError::MissingToken)?;

    let token_data = decode_jwt(&state, &token).map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        WebError::InvalidToken
    })?;

    let current_profile = EProfile::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await?
        .ok_or(WebError::InvalidToken)?;

    req.extensions_mut().insert(current_profile);
    Ok(next.run(req).await)
}

/// Runs after `authorize`; the allowed roles are the middleware state.
pub async fn require_roles(
    State(allowed): State<AccessList>,
    Extension(profile): Extension<MProfile>,
    req: Request,
    next: Next,
) -> WebResult<Response> {
    if !has_access(allowed, profile.role) {
        tracing::debug!(profile = %profile.id, role = %profile.role, path = %req.uri().path(), "role not allowed");
        return Err(WebError::RoleNotAllowed(profile.role));
    }

    Ok(next.run(req).await)
}

pub fn encode_jwt(state: &ServerState, id: Uuid) -> jsonwebtoken::errors::Result<String> {
    let now = Utc::now();
    let expire = Duration::hours(state.cli.jwt_expiry_hours);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claim = Claims { iat, exp, id };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(state.jwt_secret.as_ref()),
    )
}

pub fn decode_jwt(state: &ServerState, jwt: &str) -> jsonwebtoken::errors::Result<TokenData<Claims>> {
    decode(
        jwt,
        &DecodingKey::from_secret(state.jwt_secret.as_ref()),
        &Validation::default(),
    )
}

pub async fn update_last_login(state: &ServerState, profile: MProfile) -> Result<MProfile> {
    let mut aprofile: AProfile = profile.into();

    aprofile.last_login_at = Set(Utc::now().naive_utc());
    aprofile
        .update(&state.db)
        .await
        .context("Failed to update profile last login")
}
