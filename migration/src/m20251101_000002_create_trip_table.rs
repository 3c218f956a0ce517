use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_user_table::User;

static IDX_TRIP_USER_ID: &str = "idx_trips_user_id";
static FK_TRIP_USER_ID: &str = "fk_trips_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign key is declared inline so the cascade also applies on backends
        // without ALTER TABLE ADD CONSTRAINT support
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(integer(Trip::UserId))
                    .col(string_len(Trip::Title, 100))
                    .col(integer(Trip::NumDays))
                    .col(text_null(Trip::Preferences))
                    .col(timestamp(Trip::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRIP_USER_ID)
                            .from(Trip::Table, Trip::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRIP_USER_ID)
                    .table(Trip::Table)
                    .col(Trip::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRIP_USER_ID)
                    .table(Trip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    #[sea_orm(iden = "trips")]
    Table,
    Id,
    UserId,
    Title,
    NumDays,
    Preferences,
    CreatedAt,
}
