//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_clients;
mod m20260301_000002_create_customers;
mod m20260301_000003_create_manufacturers;
mod m20260301_000004_create_filter_plants;
mod m20260301_000005_create_components;
mod m20260301_000006_create_reports;
mod m20260301_000007_create_report_components;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_clients::Migration),
            Box::new(m20260301_000002_create_customers::Migration),
            Box::new(m20260301_000003_create_manufacturers::Migration),
            Box::new(m20260301_000004_create_filter_plants::Migration),
            Box::new(m20260301_000005_create_components::Migration),
            Box::new(m20260301_000006_create_reports::Migration),
            Box::new(m20260301_000007_create_report_components::Migration),
        ]
    }
}
