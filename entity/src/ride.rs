/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    #[sea_orm(num_value = 0)]
    OneWay,
    #[sea_orm(num_value = 1)]
    Hourly,
    #[sea_orm(num_value = 2)]
    FullDay,
}

#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    Accepted,
    #[sea_orm(num_value = 2)]
    InProgress,
    #[sea_orm(num_value = 3)]
    Completed,
    #[sea_orm(num_value = 4)]
    Cancelled,
}

impl RideStatus {
    /// Statuses a ride is still "on the books" with: booked but not finished.
    pub const OPEN: [RideStatus; 3] = [
        RideStatus::Pending,
        RideStatus::Accepted,
        RideStatus::InProgress,
    ];

    /// `Accepted -> Pending` is a driver releasing the ride back to the pool.
    pub fn can_transition_to(&self, next: RideStatus) -> bool {
        use RideStatus::*;

        matches!(
            (self, next),
            (Pending, Accepted)
                | (Pending, Cancelled)
                | (Accepted, InProgress)
                | (Accepted, Cancelled)
                | (Accepted, Pending)
                | (InProgress, Completed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Pending => "pending",
            RideStatus::Accepted => "accepted",
            RideStatus::InProgress => "in_progress",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    Completed,
    #[sea_orm(num_value = 2)]
    Failed,
    #[sea_orm(num_value = 3)]
    Refunded,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "ride")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub service_type: ServiceType,
    pub pickup_location: String,
    pub dropoff_location: Option<String>,
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    pub dropoff_lat: Option<f64>,
    pub dropoff_lng: Option<f64>,
    pub scheduled_time: NaiveDateTime,
    pub duration_hours: Option<i32>,
    pub special_instructions: Option<String>,
    pub status: RideStatus,
    pub estimated_price: i64,
    pub final_price: Option<i64>,
    pub actual_pickup_time: Option<NaiveDateTime>,
    pub actual_dropoff_time: Option<NaiveDateTime>,
    pub payment_status: PaymentStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Model {
    pub fn involves(&self, profile_id: Uuid) -> bool {
        self.customer_id == profile_id || self.driver_id == Some(profile_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::CustomerId",
        to = "super::profile::Column::Id"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::DriverId",
        to = "super::profile::Column::Id"
    )]
    Driver,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
