/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use drivemate_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret: None,
        jwt_secret_file: None,
        jwt_expiry_hours: 24,
        disable_registration: false,
        admin_email: None,
        admin_password_file: None,
        rate_one_way: 2500,
        rate_hourly: 4500,
        rate_full_day: 30000,
        currency: "usd".to_string(),
        report_errors: false,
        sentry_dsn: None,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MProfile>::new()])
        .into_connection();

    Arc::new(ServerState {
        db,
        cli,
        jwt_secret: "integration".to_string(),
    })
}
