use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Event::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Event::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Event::Title).string().not_null())
                    .col(
                        ColumnDef::new(Event::Description).string().not_null(),
                    )
                    .col(ColumnDef::new(Event::Location).string().not_null())
                    .col(ColumnDef::new(Event::Date).string().not_null())
                    .col(ColumnDef::new(Event::Tags).json_binary().not_null())
                    .col(
                        ColumnDef::new(Event::Agenda).json_binary().not_null(),
                    )
                    .col(ColumnDef::new(Event::Image).string().not_null())
                    .col(
                        ColumnDef::new(Event::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Slug,
    Title,
    Description,
    Location,
    Date,
    Tags,
    Agenda,
    Image,
    CreatedAt,
}
