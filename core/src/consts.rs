/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub static NULL_TIME: LazyLock<NaiveDateTime> =
    LazyLock::new(|| DateTime::from_timestamp(0, 0).unwrap().naive_utc());

/// Session tokens live between one hour and one year.
pub const JWT_EXPIRY_HOURS: RangeInclusive<i64> = 1..=8760;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_LOCATION_LENGTH: usize = 255;
pub const MAX_INSTRUCTIONS_LENGTH: usize = 1000;

/// Hourly bookings are billed for at least one and at most twelve hours.
pub const DURATION_HOURS: RangeInclusive<i32> = 1..=12;
/// Hours a full-day chauffeur is booked for.
pub const FULL_DAY_HOURS: i32 = 8;

pub const DEFAULT_RATE_ONE_WAY: i64 = 2500;
pub const DEFAULT_RATE_HOURLY: i64 = 4500;
pub const DEFAULT_RATE_FULL_DAY: i64 = 30000;

pub const RATING_RANGE: RangeInclusive<i32> = 1..=5;

pub const RECENT_RIDES_LIMIT: u64 = 50;

/// Bookings scheduled up to this many minutes ago still count as "now".
pub const SCHEDULE_GRACE_MINUTES: i64 = 5;
