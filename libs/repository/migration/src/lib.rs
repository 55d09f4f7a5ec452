pub use sea_orm_migration::prelude::*;

mod m20250601_093012_create_event_table;
mod m20250601_093455_create_booking_table;
mod m20250601_101230_create_index_at_booking;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_093012_create_event_table::Migration),
            Box::new(m20250601_093455_create_booking_table::Migration),
            Box::new(m20250601_101230_create_index_at_booking::Migration),
        ]
    }
}
