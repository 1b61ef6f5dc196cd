/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for booking validation and ride accounting

extern crate core as drivemate_core;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use drivemate_core::input::InputError;
use drivemate_core::permission::*;
use drivemate_core::pricing::RateCard;
use drivemate_core::rides::*;
use drivemate_core::types::MRide;
use entity::profile::Role;
use entity::ride::{PaymentStatus, RideStatus, ServiceType};
use uuid::Uuid;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(15, 0, 0)
        .unwrap()
}

fn card() -> RateCard {
    RateCard {
        one_way: 2500,
        hourly: 4500,
        full_day: 30000,
    }
}

fn request(service_type: ServiceType) -> BookingRequest {
    BookingRequest {
        service_type,
        pickup_location: " 1 Main Street ".to_string(),
        dropoff_location: Some("Airport".to_string()),
        pickup_lat: Some(40.7),
        pickup_lng: Some(-74.0),
        dropoff_lat: Some(40.6),
        dropoff_lng: Some(-73.8),
        scheduled_time: (now() + Duration::hours(2)).and_utc(),
        duration_hours: Some(3),
        special_instructions: Some("  ".to_string()),
    }
}

fn ride(status: RideStatus, price: i64, final_price: Option<i64>, dropoff: Option<NaiveDateTime>) -> MRide {
    MRide {
        id: Uuid::new_v4(),
        customer_id: Uuid::new_v4(),
        driver_id: Some(Uuid::new_v4()),
        service_type: ServiceType::OneWay,
        pickup_location: "A".to_string(),
        dropoff_location: Some("B".to_string()),
        pickup_lat: None,
        pickup_lng: None,
        dropoff_lat: None,
        dropoff_lng: None,
        scheduled_time: now(),
        duration_hours: None,
        special_instructions: None,
        status,
        estimated_price: price,
        final_price,
        actual_pickup_time: None,
        actual_dropoff_time: dropoff,
        payment_status: PaymentStatus::Pending,
        created_at: now(),
        updated_at: now(),
    }
}

#[test]
fn test_hourly_booking_keeps_duration_only() {
    let booking = validate_booking(&card(), &request(ServiceType::Hourly), now()).unwrap();

    assert_eq!(booking.estimated_price, 13500);
    assert_eq!(booking.duration_hours, Some(3));
    assert_eq!(booking.dropoff_location, None);
    assert_eq!(booking.dropoff, None);
    assert_eq!(booking.pickup_location, "1 Main Street");
    assert_eq!(booking.special_instructions, None);
}

#[test]
fn test_one_way_booking_requires_dropoff() {
    let mut req = request(ServiceType::OneWay);
    let booking = validate_booking(&card(), &req, now()).unwrap();
    assert_eq!(booking.duration_hours, None);
    assert_eq!(booking.dropoff_location.as_deref(), Some("Airport"));
    assert_eq!(booking.estimated_price, 2500);

    req.dropoff_location = Some(" ".to_string());
    assert_eq!(
        validate_booking(&card(), &req, now()),
        Err(InputError::MissingDropoff)
    );

    req.dropoff_location = None;
    assert_eq!(
        validate_booking(&card(), &req, now()),
        Err(InputError::MissingDropoff)
    );
}

#[test]
fn test_booking_rejects_bad_input() {
    let mut req = request(ServiceType::FullDay);
    req.pickup_location = String::new();
    assert_eq!(
        validate_booking(&card(), &req, now()),
        Err(InputError::Empty("Pickup location"))
    );

    let mut req = request(ServiceType::FullDay);
    req.scheduled_time = (now() - Duration::hours(1)).and_utc();
    assert_eq!(
        validate_booking(&card(), &req, now()),
        Err(InputError::ScheduledInPast)
    );

    let mut req = request(ServiceType::FullDay);
    req.pickup_lng = None;
    assert_eq!(
        validate_booking(&card(), &req, now()),
        Err(InputError::IncompleteCoordinates("Pickup"))
    );

    let mut req = request(ServiceType::FullDay);
    req.pickup_lat = Some(120.0);
    assert_eq!(
        validate_booking(&card(), &req, now()),
        Err(InputError::InvalidCoordinates("Pickup"))
    );
}

#[test]
fn test_booking_within_grace_period_is_accepted() {
    let mut req = request(ServiceType::FullDay);
    req.scheduled_time = (now() - Duration::minutes(2)).and_utc();
    let booking = validate_booking(&card(), &req, now()).unwrap();

    assert_eq!(booking.estimated_price, 30000);
    assert_eq!(booking.duration_hours, None);
}

#[test]
fn test_booking_becomes_pending_ride() {
    let customer = Uuid::new_v4();
    let booking = validate_booking(&card(), &request(ServiceType::Hourly), now()).unwrap();
    let aride = booking.into_active_model(customer, now());

    assert_eq!(aride.customer_id.unwrap(), customer);
    assert_eq!(aride.status.unwrap(), RideStatus::Pending);
    assert_eq!(aride.payment_status.unwrap(), PaymentStatus::Pending);
    assert_eq!(aride.driver_id.unwrap(), None);
    assert_eq!(aride.pickup_lat.unwrap(), Some(40.7));
}

#[test]
fn test_summarize_earnings() {
    let rides = vec![
        ride(RideStatus::Completed, 2500, Some(3000), Some(now() - Duration::hours(1))),
        ride(RideStatus::Completed, 4500, None, Some(now() - Duration::days(3))),
        ride(RideStatus::Completed, 30000, Some(30000), Some(now() - Duration::days(20))),
        ride(RideStatus::Completed, 9999, Some(9999), Some(now() - Duration::days(45))),
        ride(RideStatus::Cancelled, 2500, None, None),
    ];

    let earnings = summarize_earnings(&rides, now());
    assert_eq!(earnings.today, 3000);
    assert_eq!(earnings.last_7_days, 7500);
    assert_eq!(earnings.last_30_days, 37500);
}

#[test]
fn test_total_spent_counts_completed_rides() {
    let rides = vec![
        ride(RideStatus::Completed, 2500, Some(2500), Some(now())),
        ride(RideStatus::Pending, 4500, None, None),
        ride(RideStatus::Completed, 4500, None, Some(now())),
    ];

    assert_eq!(total_spent(&rides), 7000);
}

#[test]
fn test_booking_request_accepts_zoned_timestamps() {
    let req: BookingRequest = serde_json::from_str(
        r#"{
            "service_type": "one_way",
            "pickup_location": "1 Main Street",
            "dropoff_location": "Airport",
            "scheduled_time": "2026-03-14T17:30:00.000Z"
        }"#,
    )
    .unwrap();

    let booking = validate_booking(&card(), &req, now()).unwrap();
    assert_eq!(booking.scheduled_time, now() + Duration::minutes(150));

    let req: BookingRequest = serde_json::from_str(
        r#"{
            "service_type": "full_day",
            "pickup_location": "1 Main Street",
            "scheduled_time": "2026-03-14T18:00:00+02:00"
        }"#,
    )
    .unwrap();

    let booking = validate_booking(&card(), &req, now()).unwrap();
    assert_eq!(booking.scheduled_time, now() + Duration::hours(1));
}

#[test]
fn test_access_lists() {
    assert!(has_access(CUSTOMER_ONLY, Role::Customer));
    assert!(!has_access(CUSTOMER_ONLY, Role::Driver));
    assert!(!has_access(DRIVER_ONLY, Role::Admin));
    assert!(has_access(ADMIN_ONLY, Role::Admin));

    for role in [Role::Customer, Role::Driver, Role::Admin] {
        assert!(has_access(ANY_ROLE, role));
    }
}
