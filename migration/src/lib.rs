pub use sea_orm_migration::prelude::*;

mod m20241101_000001_create_city_table;
mod m20241101_000002_create_tag_table;
mod m20241102_000003_create_hotel_table;
mod m20241102_000004_create_hotel_tag_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_create_city_table::Migration),
            Box::new(m20241101_000002_create_tag_table::Migration),
            Box::new(m20241102_000003_create_hotel_table::Migration),
            Box::new(m20241102_000004_create_hotel_tag_table::Migration),
        ]
    }
}
