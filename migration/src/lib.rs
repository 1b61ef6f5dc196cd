/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_profile;
mod m20260301_000002_create_table_driver_profile;
mod m20260301_000003_create_table_ride;
mod m20260301_000004_create_table_payment;
mod m20260301_000005_create_table_rating;
mod m20260412_000000_add_notification_preferences_to_profile;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_profile::Migration),
            Box::new(m20260301_000002_create_table_driver_profile::Migration),
            Box::new(m20260301_000003_create_table_ride::Migration),
            Box::new(m20260301_000004_create_table_payment::Migration),
            Box::new(m20260301_000005_create_table_rating::Migration),
            Box::new(m20260412_000000_add_notification_preferences_to_profile::Migration),
        ]
    }
}
