/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Booking price estimation.
//!
//! Prices are integer cents. Hourly service is billed per hour of the
//! requested duration, one-way and full-day service at a flat rate.

use entity::ride::ServiceType;
use serde::{Deserialize, Serialize};

use super::consts::{DURATION_HOURS, FULL_DAY_HOURS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    pub one_way: i64,
    pub hourly: i64,
    pub full_day: i64,
}

impl RateCard {
    pub fn base_price(&self, service: ServiceType) -> i64 {
        match service {
            ServiceType::OneWay => self.one_way,
            ServiceType::Hourly => self.hourly,
            ServiceType::FullDay => self.full_day,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    Base,
    Hour,
    Day,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffer {
    pub id: ServiceType,
    pub name: String,
    pub description: String,
    pub base_price: i64,
    pub unit: PriceUnit,
}

pub fn clamp_duration_hours(hours: i32) -> i32 {
    hours.clamp(*DURATION_HOURS.start(), *DURATION_HOURS.end())
}

/// Duration the booking is billed or reserved for, `None` for one-way trips.
pub fn billed_hours(service: ServiceType, duration_hours: Option<i32>) -> Option<i32> {
    match service {
        ServiceType::OneWay => None,
        ServiceType::Hourly => Some(clamp_duration_hours(duration_hours.unwrap_or(1))),
        ServiceType::FullDay => Some(FULL_DAY_HOURS),
    }
}

pub fn estimate_price(card: &RateCard, service: ServiceType, duration_hours: Option<i32>) -> i64 {
    let base = card.base_price(service);

    match service {
        ServiceType::Hourly => {
            base.saturating_mul(i64::from(clamp_duration_hours(duration_hours.unwrap_or(1))))
        }
        ServiceType::OneWay | ServiceType::FullDay => base,
    }
}

pub fn service_catalog(card: &RateCard) -> Vec<ServiceOffer> {
    vec![
        ServiceOffer {
            id: ServiceType::OneWay,
            name: "One-Way Trip".to_string(),
            description: "Single destination ride".to_string(),
            base_price: card.one_way,
            unit: PriceUnit::Base,
        },
        ServiceOffer {
            id: ServiceType::Hourly,
            name: "Hourly Service".to_string(),
            description: "Multiple stops, charged by hour".to_string(),
            base_price: card.hourly,
            unit: PriceUnit::Hour,
        },
        ServiceOffer {
            id: ServiceType::FullDay,
            name: "Full Day Service".to_string(),
            description: format!("Dedicated chauffeur for up to {} hours", FULL_DAY_HOURS),
            base_price: card.full_day,
            unit: PriceUnit::Day,
        },
    ]
}
