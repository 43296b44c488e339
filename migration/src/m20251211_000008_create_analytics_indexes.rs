use sea_orm_migration::prelude::*;

use super::{
    m20251210_000002_create_visit_table::Visit,
    m20251210_000004_create_service_request_table::ServiceRequest,
    m20251210_000007_create_maintenance_record_table::MaintenanceRecord,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_visit_check_in_time")
                    .table(Visit::Table)
                    .col(Visit::CheckInTime)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visit_dock_number")
                    .table(Visit::Table)
                    .col(Visit::DockNumber)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_request_status")
                    .table(ServiceRequest::Table)
                    .col(ServiceRequest::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_maintenance_record_scheduled_date")
                    .table(MaintenanceRecord::Table)
                    .col(MaintenanceRecord::ScheduledDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_maintenance_record_scheduled_date")
                    .table(MaintenanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_service_request_status")
                    .table(ServiceRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_visit_dock_number")
                    .table(Visit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_visit_check_in_time")
                    .table(Visit::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
