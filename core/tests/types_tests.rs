/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for types and data structures

extern crate core as drivemate_core;
use clap::Parser;
use drivemate_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret: Some("test".to_string()),
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

fn create_mock_db() -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::profile::Model>::new()])
        .into_connection()
}

#[test]
fn test_server_state_creation() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let cli = create_mock_cli();
        let db = create_mock_db();

        let state = ServerState {
            db,
            cli,
            jwt_secret: "test".to_string(),
        };

        assert_eq!(state.cli.port, 3000);
        assert_eq!(state.cli.ip, "127.0.0.1");
        assert!(!state.cli.disable_registration);
    });
}

#[test]
fn test_cli_rate_card() {
    let mut cli = create_mock_cli();
    cli.rate_hourly = 6000;

    let card = cli.rate_card();
    assert_eq!(card.one_way, 2500);
    assert_eq!(card.hourly, 6000);
    assert_eq!(card.full_day, 30000);
}

#[test]
fn test_cli_rejects_non_positive_rates() {
    let result = Cli::try_parse_from(["drivemate-server", "--rate-hourly", "0"]);
    assert!(result.is_err());

    let result = Cli::try_parse_from(["drivemate-server", "--port", "70000"]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from(["drivemate-server", "--rate-one-way", "1999"]).unwrap();
    assert_eq!(cli.rate_one_way, 1999);
}

#[test]
fn test_base_response_serialization() {
    let response = BaseResponse {
        error: true,
        message: "Invalid credentials".to_string(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"], true);
    assert_eq!(json["message"], "Invalid credentials");
}

#[test]
fn test_cli_bounds_token_lifetime() {
    let result = Cli::try_parse_from(["drivemate-server", "--jwt-expiry-hours", "0"]);
    assert!(result.is_err());

    let result = Cli::try_parse_from(["drivemate-server", "--jwt-expiry-hours", "9223372036854775807"]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from(["drivemate-server", "--jwt-expiry-hours", "720"]).unwrap();
    assert_eq!(cli.jwt_expiry_hours, 720);
}

#[test]
fn test_profile_password_is_not_serialized() {
    let profile = entity::profile::Model {
        id: Uuid::new_v4(),
        email: "jane@example.com".to_string(),
        password: "argon2-hash".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        phone_number: "+15551234567".to_string(),
        role: entity::profile::Role::Customer,
        email_notifications: true,
        sms_notifications: false,
        ride_updates: true,
        promotions: false,
        last_login_at: *drivemate_core::consts::NULL_TIME,
        created_at: *drivemate_core::consts::NULL_TIME,
        updated_at: *drivemate_core::consts::NULL_TIME,
    };

    let json = serde_json::to_value(&profile).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["role"], "customer");
    assert!(!format!("{:?}", profile).contains("argon2-hash"));
}
