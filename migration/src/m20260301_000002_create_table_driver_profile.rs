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
                    .table(DriverProfile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DriverProfile::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DriverProfile::LicenseNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DriverProfile::LicenseExpiry).date().null())
                    .col(ColumnDef::new(DriverProfile::VehicleType).string().null())
                    .col(ColumnDef::new(DriverProfile::VehicleMake).string().null())
                    .col(ColumnDef::new(DriverProfile::VehicleModel).string().null())
                    .col(ColumnDef::new(DriverProfile::VehicleYear).integer().null())
                    .col(ColumnDef::new(DriverProfile::VehicleColor).string().null())
                    .col(ColumnDef::new(DriverProfile::VehiclePlate).string().null())
                    .col(
                        ColumnDef::new(DriverProfile::Verification)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DriverProfile::IsOnline)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DriverProfile::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(DriverProfile::RatingCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DriverProfile::TotalRides)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DriverProfile::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DriverProfile::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-driver_profile-profile")
                            .from(DriverProfile::Table, DriverProfile::Id)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DriverProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DriverProfile {
    Table,
    Id,
    LicenseNumber,
    LicenseExpiry,
    VehicleType,
    VehicleMake,
    VehicleModel,
    VehicleYear,
    VehicleColor,
    VehiclePlate,
    Verification,
    IsOnline,
    Rating,
    RatingCount,
    TotalRides,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
}
