/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use email_address::EmailAddress;
use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Password too short: must be at least {} characters long", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
    #[error("Password cannot exceed {} characters", MAX_PASSWORD_LENGTH)]
    PasswordTooLong,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("{0} cannot exceed {1} characters")]
    TooLong(&'static str, usize),
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("{0} coordinates are out of range")]
    InvalidCoordinates(&'static str),
    #[error("Rating must be between {} and {}", RATING_RANGE.start(), RATING_RANGE.end())]
    InvalidRating,
    #[error("Dropoff location is required for one-way trips")]
    MissingDropoff,
    #[error("Scheduled time cannot be in the past")]
    ScheduledInPast,
    #[error("{0} requires both latitude and longitude")]
    IncompleteCoordinates(&'static str),
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn expiry_in_range(s: &str) -> Result<i64, String> {
    let hours: i64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number of hours"))?;

    if JWT_EXPIRY_HOURS.contains(&hours) {
        Ok(hours)
    } else {
        Err(format!(
            "token lifetime not in range {}-{} hours",
            JWT_EXPIRY_HOURS.start(),
            JWT_EXPIRY_HOURS.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Prefers an inline value over a secret file. Empty results count as unset.
pub fn resolve_secret(value: Option<&str>, file: Option<&str>) -> Option<String> {
    let secret = match (value, file) {
        (Some(v), _) => v.trim().to_string(),
        (None, Some(f)) => load_secret(f),
        (None, None) => return None,
    };

    (!secret.is_empty()).then_some(secret)
}

pub fn validate_password(password: &str) -> Result<(), InputError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(InputError::PasswordTooShort);
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(InputError::PasswordTooLong);
    }

    Ok(())
}

/// Emails are compared case-insensitively, so they are stored lowercase.
pub fn normalize_email(email: &str) -> Result<String, InputError> {
    let email = email.trim().to_lowercase();

    if !EmailAddress::is_valid(&email) {
        return Err(InputError::InvalidEmail);
    }

    Ok(email)
}

pub fn validate_text(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<String, InputError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(InputError::Empty(field));
    }

    if value.chars().count() > max_length {
        return Err(InputError::TooLong(field, max_length));
    }

    Ok(value.to_string())
}

pub fn validate_name(field: &'static str, value: &str) -> Result<String, InputError> {
    validate_text(field, value, MAX_NAME_LENGTH)
}

pub fn validate_location(field: &'static str, value: &str) -> Result<String, InputError> {
    validate_text(field, value, MAX_LOCATION_LENGTH)
}

/// Optional free text: blank input collapses to `None`.
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max_length: usize,
) -> Result<Option<String>, InputError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => validate_text(field, v, max_length).map(Some),
        _ => Ok(None),
    }
}

/// Accepts digits with an optional leading `+` and common separators.
pub fn validate_phone(value: &str) -> Result<String, InputError> {
    let value = value.trim();
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = value
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || " -().".contains(c) || (c == '+' && i == 0));

    if !allowed || !(7..=15).contains(&digits) {
        return Err(InputError::InvalidPhone);
    }

    Ok(value.to_string())
}

pub fn validate_coordinates(field: &'static str, lat: f64, lng: f64) -> Result<(), InputError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(InputError::InvalidCoordinates(field));
    }

    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), InputError> {
    if !RATING_RANGE.contains(&rating) {
        return Err(InputError::InvalidRating);
    }

    Ok(())
}
