pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_customer_table;
mod m20251210_000002_create_visit_table;
mod m20251210_000003_create_dock_table;
mod m20251210_000004_create_service_request_table;
mod m20251210_000005_create_feedback_table;
mod m20251210_000006_create_asset_table;
mod m20251210_000007_create_maintenance_record_table;
mod m20251211_000008_create_analytics_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_customer_table::Migration),
            Box::new(m20251210_000002_create_visit_table::Migration),
            Box::new(m20251210_000003_create_dock_table::Migration),
            Box::new(m20251210_000004_create_service_request_table::Migration),
            Box::new(m20251210_000005_create_feedback_table::Migration),
            Box::new(m20251210_000006_create_asset_table::Migration),
            Box::new(m20251210_000007_create_maintenance_record_table::Migration),
            Box::new(m20251211_000008_create_analytics_indexes::Migration),
        ]
    }
}
