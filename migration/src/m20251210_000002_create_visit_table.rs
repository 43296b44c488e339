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
                    .table(Visit::Table)
                    .if_not_exists()
                    .col(pk_auto(Visit::Id))
                    .col(integer(Visit::CustomerId))
                    .col(timestamp_with_time_zone(Visit::CheckInTime))
                    .col(timestamp_with_time_zone_null(Visit::CheckOutTime))
                    .col(string(Visit::DockNumber))
                    .col(string_null(Visit::BoatName))
                    .col(string_null(Visit::BoatType))
                    .col(double(Visit::ServiceCharges).default(0.0))
                    .col(json_null(Visit::ServicesUsed))
                    .col(text_null(Visit::Notes))
                    .col(
                        timestamp_with_time_zone(Visit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visit_customer_id")
                            .from(Visit::Table, Visit::CustomerId)
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
            .drop_table(Table::drop().table(Visit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Visit {
    Table,
    Id,
    CustomerId,
    CheckInTime,
    CheckOutTime,
    DockNumber,
    BoatName,
    BoatType,
    ServiceCharges,
    ServicesUsed,
    Notes,
    CreatedAt,
}
