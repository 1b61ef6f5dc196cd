/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::{DEFAULT_RATE_FULL_DAY, DEFAULT_RATE_HOURLY, DEFAULT_RATE_ONE_WAY};
use super::input::{expiry_in_range, greater_than_zero, port_in_range};
use super::pricing::RateCard;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "DriveMate", display_name = "DriveMate", bin_name = "drivemate-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "DRIVEMATE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "DRIVEMATE_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "DRIVEMATE_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "DRIVEMATE_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "DRIVEMATE_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "DRIVEMATE_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "DRIVEMATE_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "DRIVEMATE_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,
    #[arg(long, env = "DRIVEMATE_JWT_SECRET_FILE")]
    pub jwt_secret_file: Option<String>,
    #[arg(long, env = "DRIVEMATE_JWT_EXPIRY_HOURS", value_parser = expiry_in_range, default_value = "24")]
    pub jwt_expiry_hours: i64,
    #[arg(long, env = "DRIVEMATE_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "DRIVEMATE_ADMIN_EMAIL")]
    pub admin_email: Option<String>,
    #[arg(long, env = "DRIVEMATE_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
    #[arg(long, env = "DRIVEMATE_RATE_ONE_WAY", value_parser = greater_than_zero::<i64>, default_value_t = DEFAULT_RATE_ONE_WAY)]
    pub rate_one_way: i64,
    #[arg(long, env = "DRIVEMATE_RATE_HOURLY", value_parser = greater_than_zero::<i64>, default_value_t = DEFAULT_RATE_HOURLY)]
    pub rate_hourly: i64,
    #[arg(long, env = "DRIVEMATE_RATE_FULL_DAY", value_parser = greater_than_zero::<i64>, default_value_t = DEFAULT_RATE_FULL_DAY)]
    pub rate_full_day: i64,
    #[arg(long, env = "DRIVEMATE_CURRENCY", default_value = "usd")]
    pub currency: String,
    #[arg(long, env = "DRIVEMATE_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "DRIVEMATE_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

impl Cli {
    pub fn rate_card(&self) -> RateCard {
        RateCard {
            one_way: self.rate_one_way,
            hourly: self.rate_hourly,
            full_day: self.rate_full_day,
        }
    }
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_drivers: u64,
    pub total_rides: u64,
    pub active_rides: u64,
    pub pending_approvals: u64,
    pub revenue: i64,
}

pub type EDriverProfile = driver_profile::Entity;
pub type EPayment = payment::Entity;
pub type EProfile = profile::Entity;
pub type ERating = rating::Entity;
pub type ERide = ride::Entity;

pub type MDriverProfile = driver_profile::Model;
pub type MPayment = payment::Model;
pub type MProfile = profile::Model;
pub type MRating = rating::Model;
pub type MRide = ride::Model;

pub type ADriverProfile = driver_profile::ActiveModel;
pub type APayment = payment::ActiveModel;
pub type AProfile = profile::ActiveModel;
pub type ARating = rating::ActiveModel;
pub type ARide = ride::ActiveModel;

pub type CDriverProfile = driver_profile::Column;
pub type CPayment = payment::Column;
pub type CProfile = profile::Column;
pub type CRating = rating::Column;
pub type CRide = ride::Column;

