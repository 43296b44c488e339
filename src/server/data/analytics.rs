//! Read-only queries behind the analytics endpoints.
//!
//! Each method issues one query against the current rows. Counting, grouping and
//! summing are pushed into the database; the arithmetic on the results lives in
//! `server::model::analytics`.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{
    DockStatus, MaintenanceType, MembershipTier, ServiceRequestStatus,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::analytics::{
    mean_or_zero, MaintenanceByType, MembershipCount, RequestsByStatus, RequestsByType,
    RevenueRange, TopCustomer,
};

pub struct AnalyticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count_customers(&self) -> Result<u64, DbErr> {
        entity::prelude::Customer::find().count(self.db).await
    }

    /// Counts customers created at or after `start` and, when given, before `end`.
    pub async fn count_customers_created(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Customer::find()
            .filter(entity::customer::Column::CreatedAt.gte(start));
        if let Some(end) = end {
            query = query.filter(entity::customer::Column::CreatedAt.lt(end));
        }

        query.count(self.db).await
    }

    /// Counts visits without a checkout, optionally only those checked in by `as_of`.
    pub async fn count_active_visits(
        &self,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Visit::find()
            .filter(entity::visit::Column::CheckOutTime.is_null());
        if let Some(as_of) = as_of {
            query = query.filter(entity::visit::Column::CheckInTime.lte(as_of));
        }

        query.count(self.db).await
    }

    /// Counts PENDING requests, optionally only those created by `as_of`.
    pub async fn count_pending_requests(
        &self,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::ServiceRequest::find()
            .filter(entity::service_request::Column::Status.eq(ServiceRequestStatus::Pending));
        if let Some(as_of) = as_of {
            query = query.filter(entity::service_request::Column::CreatedAt.lte(as_of));
        }

        query.count(self.db).await
    }

    /// Counts unreviewed feedback, optionally only that created by `as_of`.
    pub async fn count_unreviewed_feedback(
        &self,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Feedback::find()
            .filter(entity::feedback::Column::Reviewed.eq(false));
        if let Some(as_of) = as_of {
            query = query.filter(entity::feedback::Column::CreatedAt.lte(as_of));
        }

        query.count(self.db).await
    }

    pub async fn count_docks(&self) -> Result<u64, DbErr> {
        entity::prelude::Dock::find().count(self.db).await
    }

    /// Counts visits and sums their charges for check-ins inside `range`.
    ///
    /// # Returns
    /// - `Ok((count, sum))` - `sum` is `None` when no visit matched
    pub async fn revenue_totals(&self, range: RevenueRange) -> Result<(u64, Option<f64>), DbErr> {
        let mut query = entity::prelude::Visit::find()
            .select_only()
            .column_as(entity::visit::Column::Id.count(), "total_visits")
            .column_as(entity::visit::Column::ServiceCharges.sum(), "total_revenue");
        if let Some(start) = range.start {
            query = query.filter(entity::visit::Column::CheckInTime.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(entity::visit::Column::CheckInTime.lte(end));
        }

        let totals = query
            .into_tuple::<(i64, Option<f64>)>()
            .one(self.db)
            .await?;

        Ok(totals
            .map(|(count, sum)| (count as u64, sum))
            .unwrap_or((0, None)))
    }

    pub async fn membership_distribution(&self) -> Result<Vec<MembershipCount>, DbErr> {
        let rows = entity::prelude::Customer::find()
            .select_only()
            .column(entity::customer::Column::MembershipTier)
            .column_as(entity::customer::Column::Id.count(), "count")
            .group_by(entity::customer::Column::MembershipTier)
            .order_by_asc(entity::customer::Column::MembershipTier)
            .into_tuple::<(MembershipTier, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(tier, count)| MembershipCount {
                tier,
                count: count as u64,
            })
            .collect())
    }

    /// Customers ranked by visit count, including customers with no visits.
    ///
    /// Ties are broken by customer id so the ranking is stable.
    pub async fn top_customers(&self, limit: u64) -> Result<Vec<TopCustomer>, DbErr> {
        let rows = entity::prelude::Customer::find()
            .select_only()
            .column(entity::customer::Column::Id)
            .column(entity::customer::Column::FirstName)
            .column(entity::customer::Column::LastName)
            .column(entity::customer::Column::MembershipTier)
            .column_as(entity::visit::Column::Id.count(), "visit_count")
            .column_as(entity::visit::Column::ServiceCharges.sum(), "total_spent")
            .join(JoinType::LeftJoin, entity::customer::Relation::Visit.def())
            .group_by(entity::customer::Column::Id)
            .group_by(entity::customer::Column::FirstName)
            .group_by(entity::customer::Column::LastName)
            .group_by(entity::customer::Column::MembershipTier)
            .order_by_desc(entity::visit::Column::Id.count())
            .order_by_asc(entity::customer::Column::Id)
            .limit(limit)
            .into_tuple::<(i32, String, String, MembershipTier, i64, Option<f64>)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, first_name, last_name, membership_tier, visit_count, total_spent)| {
                    TopCustomer {
                        id,
                        first_name,
                        last_name,
                        membership_tier,
                        visit_count: visit_count as u64,
                        total_spent: total_spent.unwrap_or(0.0),
                    }
                },
            )
            .collect())
    }

    /// Request counts per service type with the mean of recorded actual costs.
    pub async fn requests_by_type(&self) -> Result<Vec<RequestsByType>, DbErr> {
        let rows = entity::prelude::ServiceRequest::find()
            .select_only()
            .column(entity::service_request::Column::ServiceType)
            .column_as(entity::service_request::Column::Id.count(), "count")
            .column_as(entity::service_request::Column::ActualCost.sum(), "cost_sum")
            .column_as(entity::service_request::Column::ActualCost.count(), "costed")
            .group_by(entity::service_request::Column::ServiceType)
            .order_by_asc(entity::service_request::Column::ServiceType)
            .into_tuple::<(String, i64, Option<f64>, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(service_type, count, cost_sum, costed)| RequestsByType {
                service_type,
                count: count as u64,
                avg_cost: mean_or_zero(cost_sum, costed as u64),
            })
            .collect())
    }

    pub async fn requests_by_status(&self) -> Result<Vec<RequestsByStatus>, DbErr> {
        let rows = entity::prelude::ServiceRequest::find()
            .select_only()
            .column(entity::service_request::Column::Status)
            .column_as(entity::service_request::Column::Id.count(), "count")
            .group_by(entity::service_request::Column::Status)
            .order_by_asc(entity::service_request::Column::Status)
            .into_tuple::<(ServiceRequestStatus, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| RequestsByStatus {
                status,
                count: count as u64,
            })
            .collect())
    }

    /// Completed maintenance since `start`, grouped by type with summed actual cost.
    pub async fn maintenance_by_type(
        &self,
        start: DateTime<Utc>,
    ) -> Result<Vec<MaintenanceByType>, DbErr> {
        let rows = entity::prelude::MaintenanceRecord::find()
            .select_only()
            .column(entity::maintenance_record::Column::MaintenanceType)
            .column_as(entity::maintenance_record::Column::Id.count(), "count")
            .column_as(entity::maintenance_record::Column::ActualCost.sum(), "total_cost")
            .filter(entity::maintenance_record::Column::CompletedDate.gte(start))
            .group_by(entity::maintenance_record::Column::MaintenanceType)
            .order_by_asc(entity::maintenance_record::Column::MaintenanceType)
            .into_tuple::<(MaintenanceType, i64, Option<f64>)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(maintenance_type, count, total_cost)| MaintenanceByType {
                maintenance_type,
                count: count as u64,
                total_cost: total_cost.unwrap_or(0.0),
            })
            .collect())
    }

    /// `(completed_date, actual_cost)` for maintenance completed since `start` with a
    /// recorded cost.
    pub async fn completed_maintenance_costs(
        &self,
        start: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, f64)>, DbErr> {
        let records = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::CompletedDate.gte(start))
            .filter(entity::maintenance_record::Column::ActualCost.is_not_null())
            .order_by_asc(entity::maintenance_record::Column::CompletedDate)
            .all(self.db)
            .await?;

        Ok(records
            .into_iter()
            .filter_map(|record| Some((record.completed_date?, record.actual_cost?)))
            .collect())
    }

    /// Every dock as `(dock_number, status)`.
    pub async fn dock_statuses(&self) -> Result<Vec<(String, DockStatus)>, DbErr> {
        entity::prelude::Dock::find()
            .select_only()
            .column(entity::dock::Column::DockNumber)
            .column(entity::dock::Column::Status)
            .into_tuple::<(String, DockStatus)>()
            .all(self.db)
            .await
    }

    /// Distinct dock numbers of active visits, restricted to `dock_numbers`.
    pub async fn active_visit_docks(&self, dock_numbers: Vec<String>) -> Result<Vec<String>, DbErr> {
        if dock_numbers.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Visit::find()
            .select_only()
            .column(entity::visit::Column::DockNumber)
            .filter(entity::visit::Column::CheckOutTime.is_null())
            .filter(entity::visit::Column::DockNumber.is_in(dock_numbers))
            .distinct()
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
