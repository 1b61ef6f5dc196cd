/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::*;
use sea_orm::ActiveEnum;

#[test]
fn test_role_storage_values() {
    assert_eq!(profile::Role::Customer.to_value(), 0);
    assert_eq!(profile::Role::Driver.to_value(), 1);
    assert_eq!(profile::Role::Admin.to_value(), 2);
    assert_eq!(profile::Role::try_from_value(&1).unwrap(), profile::Role::Driver);
    assert!(profile::Role::try_from_value(&7).is_err());
}

#[test]
fn test_ride_status_json_names() {
    assert_eq!(
        serde_json::to_string(&ride::RideStatus::InProgress).unwrap(),
        "\"in_progress\""
    );
    assert_eq!(
        serde_json::from_str::<ride::ServiceType>("\"full_day\"").unwrap(),
        ride::ServiceType::FullDay
    );
    assert_eq!(
        serde_json::from_str::<driver_profile::VerificationStatus>("\"approved\"").unwrap(),
        driver_profile::VerificationStatus::Approved
    );
    assert!(serde_json::from_str::<ride::ServiceType>("\"weekly\"").is_err());
}

#[test]
fn test_ride_status_display() {
    assert_eq!(ride::RideStatus::InProgress.to_string(), "in_progress");
    assert_eq!(profile::Role::Customer.to_string(), "customer");
    assert!(ride::RideStatus::OPEN.contains(&ride::RideStatus::Pending));
    assert!(!ride::RideStatus::OPEN.contains(&ride::RideStatus::Completed));
}
