use sea_orm_migration::prelude::*;

use crate::m20250601_093012_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Booking::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Booking::EventId).integer().not_null(),
                    )
                    .col(ColumnDef::new(Booking::Email).string().not_null())
                    .col(
                        ColumnDef::new(Booking::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Booking::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_event_id")
                            .from(Booking::Table, Booking::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    EventId,
    Email,
    CreatedAt,
    UpdatedAt,
}
