use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRequest::Id))
                    .col(integer(ServiceRequest::CustomerId))
                    .col(string(ServiceRequest::ServiceType))
                    .col(text(ServiceRequest::Description))
                    .col(string_null(ServiceRequest::Title))
                    .col(string(ServiceRequest::Status).default("PENDING"))
                    .col(string(ServiceRequest::Priority).default("MEDIUM"))
                    .col(timestamp_with_time_zone_null(ServiceRequest::ScheduledDate))
                    .col(timestamp_with_time_zone_null(ServiceRequest::RequestedDate))
                    .col(timestamp_with_time_zone_null(ServiceRequest::CompletedDate))
                    .col(double_null(ServiceRequest::EstimatedCost))
                    .col(double_null(ServiceRequest::ActualCost))
                    .col(text_null(ServiceRequest::Notes))
                    .col(
                        timestamp_with_time_zone(ServiceRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ServiceRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_request_customer_id")
                            .from(ServiceRequest::Table, ServiceRequest::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceRequest {
    Table,
    Id,
    CustomerId,
    ServiceType,
    Description,
    Title,
    Status,
    Priority,
    ScheduledDate,
    RequestedDate,
    CompletedDate,
    EstimatedCost,
    ActualCost,
    Notes,
    CreatedAt,
    UpdatedAt,
}
