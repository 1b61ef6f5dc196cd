/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;


use authorization::{authorize, require_roles};
use axum::routing::{get, post};
use axum::{Router, middleware};
use drivemate_core::permission::{ADMIN_ONLY, CUSTOMER_ONLY, DRIVER_ONLY};
use drivemate_core::types::ServerState;
use endpoints::*;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

fn cors_layer(state: &ServerState) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    match HeaderValue::from_str(state.cli.serve_url.trim_end_matches('/')) {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            tracing::warn!("Invalid serve url {}, CORS disabled", state.cli.serve_url);
            cors
        }
    }
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let customer_routes: Router<Arc<ServerState>> = Router::new()
        .route("/api/v1/rides", post(rides::post))
        .route("/api/v1/rides/{ride}/cancel", post(rides::post_ride_cancel))
        .route("/api/v1/rides/{ride}/rating", post(rides::post_ride_rating))
        .route_layer(middleware::from_fn_with_state(CUSTOMER_ONLY, require_roles));

    let driver_routes: Router<Arc<ServerState>> = Router::new()
        .route(
            "/api/v1/driver/profile",
            get(driver::get_profile).patch(driver::patch_profile),
        )
        .route("/api/v1/driver/status", post(driver::post_status))
        .route("/api/v1/driver/requests", get(driver::get_requests))
        .route(
            "/api/v1/driver/rides/{ride}/accept",
            post(driver::post_ride_accept),
        )
        .route(
            "/api/v1/driver/rides/{ride}/decline",
            post(driver::post_ride_decline),
        )
        .route(
            "/api/v1/driver/rides/{ride}/start",
            post(driver::post_ride_start),
        )
        .route(
            "/api/v1/driver/rides/{ride}/complete",
            post(driver::post_ride_complete),
        )
        .route_layer(middleware::from_fn_with_state(DRIVER_ONLY, require_roles));

    let admin_routes: Router<Arc<ServerState>> = Router::new()
        .route("/api/v1/admin/stats", get(admin::get_stats))
        .route("/api/v1/admin/users", get(admin::get_users))
        .route("/api/v1/admin/rides", get(admin::get_rides))
        .route("/api/v1/admin/drivers/pending", get(admin::get_pending))
        .route(
            "/api/v1/admin/drivers/{driver}/approve",
            post(admin::post_driver_approve),
        )
        .route(
            "/api/v1/admin/drivers/{driver}/reject",
            post(admin::post_driver_reject),
        )
        .route_layer(middleware::from_fn_with_state(ADMIN_ONLY, require_roles));

    let authenticated: Router<Arc<ServerState>> = Router::new()
        .route("/api/v1/user", get(user::get).patch(user::patch))
        .route("/api/v1/dashboard", get(dashboard::get))
        .route("/api/v1/rides", get(rides::get))
        .route("/api/v1/rides/{ride}", get(rides::get_ride))
        .route("/api/v1/rides/{ride}/payment", get(rides::get_ride_payment))
        .merge(customer_routes)
        .merge(driver_routes)
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorize,
        ));

    Router::new()
        .merge(authenticated)
        .route("/api/v1/health", get(get_health))
        .route("/api/v1/auth/signup", post(auth::post_signup))
        .route("/api/v1/auth/login", post(auth::post_login))
        .route("/api/v1/auth/logout", post(auth::post_logout))
        .route("/api/v1/pricing", get(pricing::get))
        .route("/api/v1/pricing/estimate", post(pricing::post_estimate))
        .fallback(handle_404)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state)),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
