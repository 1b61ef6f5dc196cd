/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ride::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ride::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ride::CustomerId).uuid().not_null())
                    .col(ColumnDef::new(Ride::DriverId).uuid().null())
                    .col(ColumnDef::new(Ride::ServiceType).integer().not_null())
                    .col(ColumnDef::new(Ride::PickupLocation).string().not_null())
                    .col(ColumnDef::new(Ride::DropoffLocation).string().null())
                    .col(ColumnDef::new(Ride::PickupLat).double().null())
                    .col(ColumnDef::new(Ride::PickupLng).double().null())
                    .col(ColumnDef::new(Ride::DropoffLat).double().null())
                    .col(ColumnDef::new(Ride::DropoffLng).double().null())
                    .col(ColumnDef::new(Ride::ScheduledTime).date_time().not_null())
                    .col(ColumnDef::new(Ride::DurationHours).integer().null())
                    .col(ColumnDef::new(Ride::SpecialInstructions).text().null())
                    .col(ColumnDef::new(Ride::Status).integer().not_null())
                    .col(ColumnDef::new(Ride::EstimatedPrice).big_integer().not_null())
                    .col(ColumnDef::new(Ride::FinalPrice).big_integer().null())
                    .col(ColumnDef::new(Ride::ActualPickupTime).date_time().null())
                    .col(ColumnDef::new(Ride::ActualDropoffTime).date_time().null())
                    .col(ColumnDef::new(Ride::PaymentStatus).integer().not_null())
                    .col(ColumnDef::new(Ride::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Ride::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ride-customer")
                            .from(Ride::Table, Ride::CustomerId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ride-driver")
                            .from(Ride::Table, Ride::DriverId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-ride-status-scheduled_time")
                    .table(Ride::Table)
                    .col(Ride::Status)
                    .col(Ride::ScheduledTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ride::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ride {
    Table,
    Id,
    CustomerId,
    DriverId,
    ServiceType,
    PickupLocation,
    DropoffLocation,
    PickupLat,
    PickupLng,
    DropoffLat,
    DropoffLng,
    ScheduledTime,
    DurationHours,
    SpecialInstructions,
    Status,
    EstimatedPrice,
    FinalPrice,
    ActualPickupTime,
    ActualDropoffTime,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
}
