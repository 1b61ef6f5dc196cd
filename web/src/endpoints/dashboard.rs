/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::admin::{DriverApplication, driver_applications};
use crate::error::{WebError, WebResult};
use axum::extract::State;
use axum::{Extension, Json};
use chrono::{Duration, Utc};
use drivemate_core::database::*;
use drivemate_core::rides::{Earnings, summarize_earnings, total_spent};
use drivemate_core::types::*;
use entity::driver_profile::VerificationStatus;
use entity::profile::Role;
use entity::ride::RideStatus;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize, Debug)]
pub struct CustomerDashboard {
    pub upcoming: Vec<MRide>,
    pub completed: Vec<MRide>,
    pub total_spent: i64,
    pub total_rides: usize,
}

#[derive(Serialize, Debug)]
pub struct DriverDashboard {
    pub is_online: bool,
    pub verification: VerificationStatus,
    pub rating: f64,
    pub rating_count: i32,
    pub total_rides: i32,
    pub earnings: Earnings,
    pub active_ride: Option<MRide>,
    pub requests: Vec<MRide>,
}

#[derive(Serialize, Debug)]
pub struct AdminDashboard {
    pub stats: AdminStats,
    pub pending_drivers: Vec<DriverApplication>,
    pub recent_rides: Vec<MRide>,
}

#[derive(Serialize, Debug)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Dashboard {
    Customer(CustomerDashboard),
    Driver(DriverDashboard),
    Admin(AdminDashboard),
}

async fn customer_dashboard(
    state: &State<Arc<ServerState>>,
    profile: &MProfile,
) -> WebResult<CustomerDashboard> {
    let rides = get_rides_for(Arc::clone(state), profile).await?;
    let total_spent = total_spent(&rides);
    let total_rides = rides.len();

    let (upcoming, rest): (Vec<MRide>, Vec<MRide>) = rides
        .into_iter()
        .partition(|r| RideStatus::OPEN.contains(&r.status));
    let completed = rest
        .into_iter()
        .filter(|r| r.status == RideStatus::Completed)
        .collect();

    Ok(CustomerDashboard {
        upcoming,
        completed,
        total_spent,
        total_rides,
    })
}

async fn driver_dashboard(
    state: &State<Arc<ServerState>>,
    profile: &MProfile,
) -> WebResult<DriverDashboard> {
    let driver = get_driver_profile(Arc::clone(state), profile.id)
        .await?
        .ok_or(WebError::NotFound("Driver profile"))?;

    let now = Utc::now().naive_utc();
    let completed = get_completed_rides_since(Arc::clone(state), profile.id, now - Duration::days(30)).await?;
    let active_ride = get_active_ride(Arc::clone(state), profile.id).await?;

    let requests = if driver.is_online {
        get_open_requests(Arc::clone(state)).await?
    } else {
        Vec::new()
    };

    Ok(DriverDashboard {
        is_online: driver.is_online,
        verification: driver.verification,
        rating: driver.rating,
        rating_count: driver.rating_count,
        total_rides: driver.total_rides,
        earnings: summarize_earnings(&completed, now),
        active_ride,
        requests,
    })
}

async fn admin_dashboard(state: &State<Arc<ServerState>>) -> WebResult<AdminDashboard> {
    Ok(AdminDashboard {
        stats: get_admin_stats(Arc::clone(state)).await?,
        pending_drivers: driver_applications(state).await?,
        recent_rides: get_recent_rides(Arc::clone(state)).await?,
    })
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(profile): Extension<MProfile>,
) -> WebResult<Json<BaseResponse<Dashboard>>> {
    let dashboard = match profile.role {
        Role::Customer => Dashboard::Customer(customer_dashboard(&state, &profile).await?),
        Role::Driver => Dashboard::Driver(driver_dashboard(&state, &profile).await?),
        Role::Admin => Dashboard::Admin(admin_dashboard(&state).await?),
    };

    let res = BaseResponse {
        error: false,
        message: dashboard,
    };

    Ok(Json(res))
}
