use sea_orm_migration::prelude::*;

use crate::m20250601_093455_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Booking::Table)
                    .name("idx_booking_event_id")
                    .col(Booking::EventId)
                    .to_owned(),
            )
            .await?;

        // one booking per (event, email) pair
        manager
            .create_index(
                Index::create()
                    .table(Booking::Table)
                    .name("uniq_booking_event_id_email")
                    .col(Booking::EventId)
                    .col(Booking::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Booking::Table)
                    .name("uniq_booking_event_id_email")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .table(Booking::Table)
                    .name("idx_booking_event_id")
                    .to_owned(),
            )
            .await
    }
}
