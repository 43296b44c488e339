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
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::Id))
                    .col(integer(Feedback::CustomerId))
                    .col(string(Feedback::Category).default("GENERAL"))
                    .col(integer_null(Feedback::Rating))
                    .col(text(Feedback::Comments))
                    .col(integer_null(Feedback::SentimentScore))
                    .col(boolean(Feedback::Reviewed).default(false))
                    .col(text_null(Feedback::StaffResponse))
                    .col(
                        timestamp_with_time_zone(Feedback::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedback_customer_id")
                            .from(Feedback::Table, Feedback::CustomerId)
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
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    Id,
    CustomerId,
    Category,
    Rating,
    Comments,
    SentimentScore,
    Reviewed,
    StaffResponse,
    CreatedAt,
}
