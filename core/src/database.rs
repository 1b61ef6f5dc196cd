/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use entity::driver_profile::VerificationStatus;
use entity::profile::{self, Role};
use entity::ride::RideStatus;
use migration::Migrator;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectOptions, Database,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::{NULL_TIME, RECENT_RIDES_LIMIT};
use super::input::{load_secret, normalize_email, resolve_secret, validate_password};
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = resolve_secret(cli.database_url.as_deref(), cli.database_url_file.as_deref())
        .context("No database url provided")?;

    let mut opt = ConnectOptions::new(db_url);

    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    bootstrap_admin(&db, cli)
        .await
        .context("Failed to create bootstrap admin")?;
    Ok(db)
}

/// Admins cannot sign up; the configured one is created on first start.
pub async fn bootstrap_admin(db: &DatabaseConnection, cli: &Cli) -> Result<()> {
    let (Some(email), Some(password_file)) = (&cli.admin_email, &cli.admin_password_file) else {
        return Ok(());
    };

    let email = normalize_email(email)?;

    let existing = EProfile::find()
        .filter(CProfile::Email.eq(email.clone()))
        .one(db)
        .await
        .context("Failed to query admin profile")?;

    if let Some(profile) = existing {
        if profile.role != Role::Admin {
            tracing::warn!(email = %email, role = %profile.role, "bootstrap admin e-mail belongs to a non-admin profile");
        }
        return Ok(());
    }

    let password = load_secret(password_file);
    validate_password(&password)?;

    let now = Utc::now().naive_utc();
    let aprofile = AProfile {
        id: Set(Uuid::new_v4()),
        email: Set(email.clone()),
        password: Set(password_auth::generate_hash(password)),
        first_name: Set("Admin".to_string()),
        last_name: Set(String::new()),
        phone_number: Set(String::new()),
        role: Set(Role::Admin),
        email_notifications: Set(true),
        sms_notifications: Set(false),
        ride_updates: Set(true),
        promotions: Set(false),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(now),
        updated_at: Set(now),
    };

    aprofile
        .insert(db)
        .await
        .context("Failed to insert admin profile")?;

    tracing::info!(email = %email, "created bootstrap admin");
    Ok(())
}

pub async fn get_profile_by_email(state: Arc<ServerState>, email: &str) -> Result<Option<MProfile>> {
    Ok(EProfile::find()
        .filter(CProfile::Email.eq(email))
        .one(&state.db)
        .await
        .context("Failed to query profile")?)
}

pub async fn get_driver_profile(
    state: Arc<ServerState>,
    profile_id: Uuid,
) -> Result<Option<MDriverProfile>> {
    Ok(EDriverProfile::find_by_id(profile_id)
        .one(&state.db)
        .await
        .context("Failed to query driver profile")?)
}

fn rides_of(profile: &MProfile) -> Condition {
    match profile.role {
        Role::Customer => Condition::all().add(CRide::CustomerId.eq(profile.id)),
        Role::Driver => Condition::all().add(CRide::DriverId.eq(profile.id)),
        Role::Admin => Condition::all(),
    }
}

/// Customers see rides they booked, drivers rides assigned to them, admins everything.
pub async fn get_rides_for(state: Arc<ServerState>, profile: &MProfile) -> Result<Vec<MRide>> {
    Ok(ERide::find()
        .filter(rides_of(profile))
        .order_by_desc(CRide::ScheduledTime)
        .all(&state.db)
        .await
        .context("Failed to query rides")?)
}

pub async fn get_visible_ride(
    state: Arc<ServerState>,
    profile: &MProfile,
    ride_id: Uuid,
) -> Result<Option<MRide>> {
    let ride = ERide::find_by_id(ride_id)
        .one(&state.db)
        .await
        .context("Failed to query ride")?;

    Ok(ride.filter(|r| profile.role == Role::Admin || r.involves(profile.id)))
}

/// Unassigned rides waiting for a driver, soonest first.
pub async fn get_open_requests(state: Arc<ServerState>) -> Result<Vec<MRide>> {
    Ok(ERide::find()
        .filter(
            Condition::all()
                .add(CRide::Status.eq(RideStatus::Pending))
                .add(CRide::DriverId.is_null()),
        )
        .order_by_asc(CRide::ScheduledTime)
        .all(&state.db)
        .await
        .context("Failed to query ride requests")?)
}

pub async fn get_active_ride(
    state: Arc<ServerState>,
    driver_id: Uuid,
) -> Result<Option<MRide>> {
    Ok(ERide::find()
        .filter(
            Condition::all()
                .add(CRide::DriverId.eq(driver_id))
                .add(CRide::Status.is_in([RideStatus::Accepted, RideStatus::InProgress])),
        )
        .order_by_asc(CRide::ScheduledTime)
        .one(&state.db)
        .await
        .context("Failed to query active ride")?)
}

pub async fn get_completed_rides_since(
    state: Arc<ServerState>,
    driver_id: Uuid,
    since: NaiveDateTime,
) -> Result<Vec<MRide>> {
    Ok(ERide::find()
        .filter(
            Condition::all()
                .add(CRide::DriverId.eq(driver_id))
                .add(CRide::Status.eq(RideStatus::Completed))
                .add(CRide::ActualDropoffTime.gte(since)),
        )
        .all(&state.db)
        .await
        .context("Failed to query completed rides")?)
}

pub async fn get_recent_rides(state: Arc<ServerState>) -> Result<Vec<MRide>> {
    Ok(ERide::find()
        .order_by_desc(CRide::CreatedAt)
        .limit(RECENT_RIDES_LIMIT)
        .all(&state.db)
        .await
        .context("Failed to query recent rides")?)
}

pub async fn get_pending_drivers(
    state: Arc<ServerState>,
) -> Result<Vec<(MDriverProfile, Option<MProfile>)>> {
    Ok(EDriverProfile::find()
        .filter(CDriverProfile::Verification.eq(VerificationStatus::Pending))
        .order_by_asc(CDriverProfile::CreatedAt)
        .find_also_related(profile::Entity)
        .all(&state.db)
        .await
        .context("Failed to query pending drivers")?)
}

pub async fn get_admin_stats(state: Arc<ServerState>) -> Result<AdminStats> {
    let db = &state.db;

    let total_users = EProfile::find()
        .count(db)
        .await
        .context("Failed to count profiles")?;
    let total_drivers = EProfile::find()
        .filter(CProfile::Role.eq(Role::Driver))
        .count(db)
        .await
        .context("Failed to count drivers")?;
    let total_rides = ERide::find()
        .count(db)
        .await
        .context("Failed to count rides")?;
    let active_rides = ERide::find()
        .filter(CRide::Status.is_in([RideStatus::Accepted, RideStatus::InProgress]))
        .count(db)
        .await
        .context("Failed to count active rides")?;
    let pending_approvals = EDriverProfile::find()
        .filter(CDriverProfile::Verification.eq(VerificationStatus::Pending))
        .count(db)
        .await
        .context("Failed to count pending drivers")?;

    let revenue = ERide::find()
        .select_only()
        .column(CRide::FinalPrice)
        .filter(CRide::Status.eq(RideStatus::Completed))
        .into_tuple::<Option<i64>>()
        .all(db)
        .await
        .context("Failed to query revenue")?
        .into_iter()
        .flatten()
        .sum();

    Ok(AdminStats {
        total_users,
        total_drivers,
        total_rides,
        active_rides,
        pending_approvals,
        revenue,
    })
}
