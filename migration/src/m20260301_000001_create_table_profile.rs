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
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profile::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Profile::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profile::Password).string().not_null())
                    .col(ColumnDef::new(Profile::FirstName).string().not_null())
                    .col(ColumnDef::new(Profile::LastName).string().not_null())
                    .col(ColumnDef::new(Profile::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Profile::Role).integer().not_null())
                    .col(ColumnDef::new(Profile::LastLoginAt).date_time().not_null())
                    .col(ColumnDef::new(Profile::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Profile::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Email,
    Password,
    FirstName,
    LastName,
    PhoneNumber,
    Role,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
