/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

extern crate core as drivemate_core;
use drivemate_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_expiry_in_range() {
    assert_eq!(expiry_in_range("24").unwrap(), 24);
    assert_eq!(expiry_in_range("8760").unwrap(), 8760);

    let err = expiry_in_range("8761").unwrap_err();
    assert_eq!(err, "token lifetime not in range 1-8760 hours");

    let err = expiry_in_range("0").unwrap_err();
    assert_eq!(err, "token lifetime not in range 1-8760 hours");

    let err = expiry_in_range("forever").unwrap_err();
    assert_eq!(err, "`forever` is not a number of hours");
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<i64>("2500").unwrap();
    assert_eq!(num, 2500);

    let num = greater_than_zero::<i64>("0").unwrap_err();
    assert_eq!(num, "`0` is not larger than 0");

    let num = greater_than_zero::<i64>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not larger than 0");

    let num = greater_than_zero::<i64>("cents").unwrap_err();
    assert_eq!(num, "`cents` is not a valid number");
}

#[test]
fn test_validate_password() {
    assert_eq!(validate_password("12345"), Err(InputError::PasswordTooShort));
    assert!(validate_password("123456").is_ok());
    assert_eq!(
        validate_password(&"a".repeat(129)),
        Err(InputError::PasswordTooLong)
    );

    let message = InputError::PasswordTooShort.to_string();
    assert!(message.starts_with("Password too short"));
    assert!(message.contains('6'));
}

#[test]
fn test_normalize_email() {
    assert_eq!(
        normalize_email("  Jane.Doe@Example.COM ").unwrap(),
        "jane.doe@example.com"
    );
    assert_eq!(normalize_email("not-an-email"), Err(InputError::InvalidEmail));
    assert_eq!(normalize_email(""), Err(InputError::InvalidEmail));
}

#[test]
fn test_validate_name() {
    assert_eq!(validate_name("First name", "  Ada ").unwrap(), "Ada");
    assert_eq!(
        validate_name("First name", "   "),
        Err(InputError::Empty("First name"))
    );
    assert_eq!(
        validate_name("Last name", &"x".repeat(101)),
        Err(InputError::TooLong("Last name", 100))
    );
}

#[test]
fn test_optional_text() {
    assert_eq!(optional_text("Notes", None, 10).unwrap(), None);
    assert_eq!(optional_text("Notes", Some("  "), 10).unwrap(), None);
    assert_eq!(
        optional_text("Notes", Some(" gate 4 "), 10).unwrap(),
        Some("gate 4".to_string())
    );
    assert_eq!(
        optional_text("Notes", Some("far too long text"), 10),
        Err(InputError::TooLong("Notes", 10))
    );
}

#[test]
fn test_validate_phone() {
    assert_eq!(validate_phone("+1 (555) 123-4567").unwrap(), "+1 (555) 123-4567");
    assert!(validate_phone("0301234567").is_ok());
    assert_eq!(validate_phone("12345"), Err(InputError::InvalidPhone));
    assert_eq!(validate_phone("555-CALL-NOW"), Err(InputError::InvalidPhone));
    assert_eq!(validate_phone("1+5551234567"), Err(InputError::InvalidPhone));
}

#[test]
fn test_validate_coordinates() {
    assert!(validate_coordinates("Pickup", 52.52, 13.405).is_ok());
    assert_eq!(
        validate_coordinates("Pickup", 91.0, 0.0),
        Err(InputError::InvalidCoordinates("Pickup"))
    );
    assert_eq!(
        validate_coordinates("Dropoff", 0.0, -180.5),
        Err(InputError::InvalidCoordinates("Dropoff"))
    );
}

#[test]
fn test_validate_rating() {
    assert!(validate_rating(1).is_ok());
    assert!(validate_rating(5).is_ok());
    assert_eq!(validate_rating(0), Err(InputError::InvalidRating));
    assert_eq!(validate_rating(6), Err(InputError::InvalidRating));
}

#[test]
fn test_resolve_secret() {
    assert_eq!(resolve_secret(None, None), None);
    assert_eq!(resolve_secret(Some("  "), None), None);
    assert_eq!(
        resolve_secret(Some(" inline "), Some("/nonexistent")),
        Some("inline".to_string())
    );
    assert_eq!(resolve_secret(None, Some("/nonexistent/secret")), None);

    let path = std::env::temp_dir().join(format!("drivemate-secret-{}", std::process::id()));
    std::fs::write(&path, "from-file\n").unwrap();
    assert_eq!(
        resolve_secret(None, path.to_str()),
        Some("from-file".to_string())
    );
    std::fs::remove_file(path).unwrap();
}
