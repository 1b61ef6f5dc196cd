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
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rating::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rating::RideId).uuid().not_null())
                    .col(ColumnDef::new(Rating::RatingBy).uuid().not_null())
                    .col(ColumnDef::new(Rating::RatingFor).uuid().not_null())
                    .col(ColumnDef::new(Rating::Rating).integer().not_null())
                    .col(ColumnDef::new(Rating::Comment).text().null())
                    .col(ColumnDef::new(Rating::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-rating-ride")
                            .from(Rating::Table, Rating::RideId)
                            .to(Ride::Table, Ride::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-rating-ride-rating_by")
                    .table(Rating::Table)
                    .col(Rating::RideId)
                    .col(Rating::RatingBy)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Rating {
    Table,
    Id,
    RideId,
    RatingBy,
    RatingFor,
    Rating,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Ride {
    Table,
    Id,
}
