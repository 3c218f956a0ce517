use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_create_trip_table::Trip;

static IDX_ITINERARY_DAY_TRIP_DAY: &str = "idx_itinerary_days_trip_id_day_number";
static FK_ITINERARY_DAY_TRIP_ID: &str = "fk_itinerary_days_trip_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItineraryDay::Table)
                    .if_not_exists()
                    .col(pk_auto(ItineraryDay::Id))
                    .col(integer(ItineraryDay::TripId))
                    .col(integer(ItineraryDay::DayNumber))
                    .col(text(ItineraryDay::Content))
                    .col(timestamp(ItineraryDay::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ITINERARY_DAY_TRIP_ID)
                            .from(ItineraryDay::Table, ItineraryDay::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Also serves lookups by trip ID since trip_id is the leading column
        manager
            .create_index(
                Index::create()
                    .name(IDX_ITINERARY_DAY_TRIP_DAY)
                    .table(ItineraryDay::Table)
                    .col(ItineraryDay::TripId)
                    .col(ItineraryDay::DayNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITINERARY_DAY_TRIP_DAY)
                    .table(ItineraryDay::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItineraryDay::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ItineraryDay {
    #[sea_orm(iden = "itinerary_days")]
    Table,
    Id,
    TripId,
    DayNumber,
    Content,
    UpdatedAt,
}
