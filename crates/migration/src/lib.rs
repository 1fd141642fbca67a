//! Migrator creating the three sample-data tables.
//! The database is in-memory, so these run once per process start.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_technicians;
mod m20240601_000002_create_appliance_types;
mod m20240601_000003_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_technicians::Migration),
            Box::new(m20240601_000002_create_appliance_types::Migration),
            Box::new(m20240601_000003_create_users::Migration),
        ]
    }
}
