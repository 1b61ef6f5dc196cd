/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Utc};
use entity::ride::{PaymentStatus, RideStatus, ServiceType};
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::consts::{MAX_INSTRUCTIONS_LENGTH, SCHEDULE_GRACE_MINUTES};
use super::input::*;
use super::pricing::{clamp_duration_hours, estimate_price, RateCard};
use super::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub service_type: ServiceType,
    pub pickup_location: String,
    pub dropoff_location: Option<String>,
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    pub dropoff_lat: Option<f64>,
    pub dropoff_lng: Option<f64>,
    pub scheduled_time: DateTime<Utc>,
    pub duration_hours: Option<i32>,
    pub special_instructions: Option<String>,
}

/// A booking request that passed validation and has been priced.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub service_type: ServiceType,
    pub pickup_location: String,
    pub dropoff_location: Option<String>,
    pub pickup: Option<(f64, f64)>,
    pub dropoff: Option<(f64, f64)>,
    pub scheduled_time: NaiveDateTime,
    pub duration_hours: Option<i32>,
    pub special_instructions: Option<String>,
    pub estimated_price: i64,
}

fn coordinates(
    field: &'static str,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Option<(f64, f64)>, InputError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            validate_coordinates(field, lat, lng)?;
            Ok(Some((lat, lng)))
        }
        (None, None) => Ok(None),
        _ => Err(InputError::IncompleteCoordinates(field)),
    }
}

/// Dropoff data is kept for one-way trips only, duration for hourly service only.
pub fn validate_booking(
    card: &RateCard,
    request: &BookingRequest,
    now: NaiveDateTime,
) -> Result<Booking, InputError> {
    let pickup_location = validate_location("Pickup location", &request.pickup_location)?;
    let pickup = coordinates("Pickup", request.pickup_lat, request.pickup_lng)?;

    let (dropoff_location, dropoff) = if request.service_type == ServiceType::OneWay {
        let location = request
            .dropoff_location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .ok_or(InputError::MissingDropoff)?;

        (
            Some(validate_location("Dropoff location", location)?),
            coordinates("Dropoff", request.dropoff_lat, request.dropoff_lng)?,
        )
    } else {
        (None, None)
    };

    let scheduled_time = request.scheduled_time.naive_utc();
    if scheduled_time < now - Duration::minutes(SCHEDULE_GRACE_MINUTES) {
        return Err(InputError::ScheduledInPast);
    }

    let duration_hours = (request.service_type == ServiceType::Hourly)
        .then(|| clamp_duration_hours(request.duration_hours.unwrap_or(1)));

    let special_instructions = optional_text(
        "Special instructions",
        request.special_instructions.as_deref(),
        MAX_INSTRUCTIONS_LENGTH,
    )?;

    Ok(Booking {
        service_type: request.service_type,
        pickup_location,
        dropoff_location,
        pickup,
        dropoff,
        scheduled_time,
        duration_hours,
        special_instructions,
        estimated_price: estimate_price(card, request.service_type, request.duration_hours),
    })
}

impl Booking {
    pub fn into_active_model(self, customer_id: Uuid, now: NaiveDateTime) -> ARide {
        ARide {
            id: Set(Uuid::new_v4()),
            customer_id: Set(customer_id),
            driver_id: Set(None),
            service_type: Set(self.service_type),
            pickup_location: Set(self.pickup_location),
            dropoff_location: Set(self.dropoff_location),
            pickup_lat: Set(self.pickup.map(|(lat, _)| lat)),
            pickup_lng: Set(self.pickup.map(|(_, lng)| lng)),
            dropoff_lat: Set(self.dropoff.map(|(lat, _)| lat)),
            dropoff_lng: Set(self.dropoff.map(|(_, lng)| lng)),
            scheduled_time: Set(self.scheduled_time),
            duration_hours: Set(self.duration_hours),
            special_instructions: Set(self.special_instructions),
            status: Set(RideStatus::Pending),
            estimated_price: Set(self.estimated_price),
            final_price: Set(None),
            actual_pickup_time: Set(None),
            actual_dropoff_time: Set(None),
            payment_status: Set(PaymentStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    pub today: i64,
    pub last_7_days: i64,
    pub last_30_days: i64,
}

/// Amount a finished ride is worth, falling back to the estimate.
pub fn ride_amount(ride: &MRide) -> i64 {
    ride.final_price.unwrap_or(ride.estimated_price)
}

/// Completed rides bucketed by dropoff time. "Today" starts at UTC midnight.
pub fn summarize_earnings(rides: &[MRide], now: NaiveDateTime) -> Earnings {
    let midnight = now.date().and_time(NaiveTime::MIN);
    let week = now - Duration::days(7);
    let month = now - Duration::days(30);

    rides
        .iter()
        .filter(|r| r.status == RideStatus::Completed)
        .filter_map(|r| r.actual_dropoff_time.map(|t| (t, ride_amount(r))))
        .fold(Earnings::default(), |mut acc, (finished, amount)| {
            if finished >= midnight {
                acc.today += amount;
            }
            if finished >= week {
                acc.last_7_days += amount;
            }
            if finished >= month {
                acc.last_30_days += amount;
            }
            acc
        })
}

pub fn total_spent(rides: &[MRide]) -> i64 {
    rides
        .iter()
        .filter(|r| r.status == RideStatus::Completed)
        .map(ride_amount)
        .sum()
}
