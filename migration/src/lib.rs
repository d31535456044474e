pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_drone_table;
mod m20260101_000002_create_medication_table;
mod m20260101_000003_create_drone_medication_table;
mod m20260101_000004_create_drone_battery_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_drone_table::Migration),
            Box::new(m20260101_000002_create_medication_table::Migration),
            Box::new(m20260101_000003_create_drone_medication_table::Migration),
            Box::new(m20260101_000004_create_drone_battery_history_table::Migration),
        ]
    }
}
