/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for booking price estimation

extern crate core as drivemate_core;
use drivemate_core::pricing::*;
use entity::ride::ServiceType;

fn default_card() -> RateCard {
    RateCard {
        one_way: 2500,
        hourly: 4500,
        full_day: 30000,
    }
}

#[test]
fn test_hourly_price_scales_with_duration() {
    let card = default_card();

    assert_eq!(estimate_price(&card, ServiceType::Hourly, Some(3)), 13500);
    assert_eq!(estimate_price(&card, ServiceType::Hourly, Some(1)), 4500);
    assert_eq!(estimate_price(&card, ServiceType::Hourly, None), 4500);
}

#[test]
fn test_hourly_duration_is_clamped() {
    let card = default_card();

    assert_eq!(estimate_price(&card, ServiceType::Hourly, Some(0)), 4500);
    assert_eq!(estimate_price(&card, ServiceType::Hourly, Some(-4)), 4500);
    assert_eq!(estimate_price(&card, ServiceType::Hourly, Some(40)), 4500 * 12);

    assert_eq!(clamp_duration_hours(0), 1);
    assert_eq!(clamp_duration_hours(7), 7);
    assert_eq!(clamp_duration_hours(13), 12);
}

#[test]
fn test_flat_rates_ignore_duration() {
    let card = default_card();

    assert_eq!(estimate_price(&card, ServiceType::OneWay, Some(5)), 2500);
    assert_eq!(estimate_price(&card, ServiceType::OneWay, None), 2500);
    assert_eq!(estimate_price(&card, ServiceType::FullDay, Some(3)), 30000);
}

#[test]
fn test_billed_hours() {
    assert_eq!(billed_hours(ServiceType::OneWay, Some(3)), None);
    assert_eq!(billed_hours(ServiceType::Hourly, Some(3)), Some(3));
    assert_eq!(billed_hours(ServiceType::Hourly, None), Some(1));
    assert_eq!(billed_hours(ServiceType::FullDay, None), Some(8));
}

#[test]
fn test_service_catalog_uses_configured_rates() {
    let card = RateCard {
        one_way: 1000,
        hourly: 2000,
        full_day: 9000,
    };

    let catalog = service_catalog(&card);
    assert_eq!(catalog.len(), 3);

    let hourly = catalog
        .iter()
        .find(|s| s.id == ServiceType::Hourly)
        .unwrap();
    assert_eq!(hourly.base_price, 2000);
    assert_eq!(hourly.unit, PriceUnit::Hour);

    let json = serde_json::to_value(&catalog[2]).unwrap();
    assert_eq!(json["id"], "full_day");
    assert_eq!(json["unit"], "day");
}
