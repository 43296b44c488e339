//! Analytics service computing dashboard, revenue, customer, service, maintenance and
//! occupancy summaries.
//!
//! Every call recomputes from the current rows with a short sequence of independent
//! read-only queries. No transaction spans them, so a concurrent write can land
//! between two sub-queries; a failed sub-query fails the whole call.

use chrono::{DateTime, Duration, Months, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::analytics::AnalyticsRepository,
    error::AppError,
    model::analytics::{
        calculate_change, compute_occupancy, monthly_spending, CustomerInsights,
        DashboardOverview, MaintenanceAnalytics, Occupancy, RevenueRange, RevenueSummary,
        ServiceAnalytics,
    },
};

/// Length of the dashboard comparison window.
const DASHBOARD_WINDOW_DAYS: i64 = 30;

/// Number of customers listed in the insights ranking.
const TOP_CUSTOMER_LIMIT: u64 = 10;

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn dashboard_overview(&self) -> Result<DashboardOverview, AppError> {
        self.dashboard_overview_at(Utc::now()).await
    }

    /// Builds the dashboard as seen at `now`.
    ///
    /// Customer growth compares customers created in the last 30 days with those
    /// created in the 30 days before. Visits, requests and feedback compare the live
    /// count with an approximation of the count at the window start: rows that existed
    /// then and are still open now. Rows closed since the window start are not seen.
    pub async fn dashboard_overview_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<DashboardOverview, AppError> {
        let repo = AnalyticsRepository::new(self.db);
        let window_start = now - Duration::days(DASHBOARD_WINDOW_DAYS);
        let prior_window_start = window_start - Duration::days(DASHBOARD_WINDOW_DAYS);

        let total_customers = repo.count_customers().await?;
        let active_visits = repo.count_active_visits(None).await?;
        let pending_requests = repo.count_pending_requests(None).await?;
        let unreviewed_feedback = repo.count_unreviewed_feedback(None).await?;
        let total_docks = repo.count_docks().await?;

        let new_customers = repo.count_customers_created(window_start, None).await?;
        let prior_new_customers = repo
            .count_customers_created(prior_window_start, Some(window_start))
            .await?;

        let visits_then = repo.count_active_visits(Some(window_start)).await?;
        let requests_then = repo.count_pending_requests(Some(window_start)).await?;
        let feedback_then = repo.count_unreviewed_feedback(Some(window_start)).await?;

        Ok(DashboardOverview {
            total_customers,
            active_visits,
            pending_requests,
            unreviewed_feedback,
            total_docks,
            customers_change: calculate_change(new_customers, prior_new_customers),
            visits_change: calculate_change(active_visits, visits_then),
            requests_change: calculate_change(pending_requests, requests_then),
            feedback_change: calculate_change(unreviewed_feedback, feedback_then),
        })
    }

    /// Sums visit charges for check-ins inside the inclusive range.
    pub async fn revenue(&self, range: RevenueRange) -> Result<RevenueSummary, AppError> {
        let (total_visits, total_revenue) = AnalyticsRepository::new(self.db)
            .revenue_totals(range)
            .await?;

        Ok(RevenueSummary::from_totals(total_visits, total_revenue))
    }

    pub async fn customer_insights(&self) -> Result<CustomerInsights, AppError> {
        let repo = AnalyticsRepository::new(self.db);

        let membership_distribution = repo.membership_distribution().await?;
        let top_customers = repo.top_customers(TOP_CUSTOMER_LIMIT).await?;

        Ok(CustomerInsights {
            membership_distribution,
            top_customers,
        })
    }

    pub async fn service_analytics(&self) -> Result<ServiceAnalytics, AppError> {
        let repo = AnalyticsRepository::new(self.db);

        let requests_by_type = repo.requests_by_type().await?;
        let requests_by_status = repo.requests_by_status().await?;

        Ok(ServiceAnalytics {
            requests_by_type,
            requests_by_status,
        })
    }

    pub async fn maintenance_analytics(
        &self,
        months: u32,
    ) -> Result<MaintenanceAnalytics, AppError> {
        self.maintenance_analytics_at(months, Utc::now()).await
    }

    /// Summarizes maintenance completed in the `months` calendar months before `now`.
    ///
    /// # Returns
    /// - `Ok(MaintenanceAnalytics)` - Per-type totals and an ascending monthly series
    /// - `Err(AppError::BadRequest)` - Window start is not representable
    pub async fn maintenance_analytics_at(
        &self,
        months: u32,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceAnalytics, AppError> {
        let start = now
            .checked_sub_months(Months::new(months))
            .ok_or_else(|| AppError::BadRequest(format!("months {} is out of range", months)))?;
        let repo = AnalyticsRepository::new(self.db);

        let maintenance_by_type = repo.maintenance_by_type(start).await?;
        let costs = repo.completed_maintenance_costs(start).await?;

        Ok(MaintenanceAnalytics {
            maintenance_by_type,
            monthly_spending: monthly_spending(costs),
        })
    }

    /// Reconciles dock statuses with active visits into an occupancy snapshot.
    ///
    /// Returns all zeros without further queries when there are no docks.
    pub async fn occupancy(&self) -> Result<Occupancy, AppError> {
        let repo = AnalyticsRepository::new(self.db);

        if repo.count_docks().await? == 0 {
            return Ok(Occupancy::default());
        }

        let docks = repo.dock_statuses().await?;
        let dock_numbers = docks.iter().map(|(number, _)| number.clone()).collect();
        let active_visit_docks = repo.active_visit_docks(dock_numbers).await?;

        Ok(compute_occupancy(&docks, &active_visit_docks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::analytics::ChangeType;
    use entity::sea_orm_active_enums::DockStatus;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests occupancy for ten docks with mixed statuses and visits.
    ///
    /// Docks: 3 available with an active visit on one, 4 occupied, 2 under maintenance,
    /// 1 out of service. An extra active visit names a dock that does not exist.
    ///
    /// Expected: 5 occupied of 7 operational docks, rate 71.43
    #[tokio::test]
    async fn occupancy_reconciles_statuses_and_visits() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let statuses = [
            ("A1", DockStatus::Available),
            ("A2", DockStatus::Available),
            ("A3", DockStatus::Available),
            ("B1", DockStatus::Occupied),
            ("B2", DockStatus::Occupied),
            ("B3", DockStatus::Occupied),
            ("B4", DockStatus::Occupied),
            ("M1", DockStatus::Maintenance),
            ("M2", DockStatus::Maintenance),
            ("X1", DockStatus::OutOfService),
        ];
        for (number, status) in statuses {
            factory::create_dock_with_status(db, number, status).await.unwrap();
        }
        let customer = factory::create_customer(db).await.unwrap();
        factory::create_active_visit(db, customer.id, "A1").await.unwrap();
        factory::create_active_visit(db, customer.id, "B1").await.unwrap();
        factory::create_active_visit(db, customer.id, "GHOST").await.unwrap();

        let occupancy = AnalyticsService::new(db).occupancy().await.unwrap();

        assert_eq!(occupancy.total_docks, 10);
        assert_eq!(occupancy.occupied_docks, 5);
        assert_eq!(occupancy.available_docks, 2);
        assert_eq!(occupancy.maintenance_docks, 2);
        assert_eq!(occupancy.out_of_service_docks, 1);
        assert_eq!(occupancy.occupancy_rate, 71.43);
    }

    /// Tests occupancy with no docks.
    ///
    /// Expected: every field zero even when visits exist
    #[tokio::test]
    async fn occupancy_without_docks_is_zero() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let customer = factory::create_customer(db).await.unwrap();
        factory::create_active_visit(db, customer.id, "A1").await.unwrap();

        let occupancy = AnalyticsService::new(db).occupancy().await.unwrap();

        assert_eq!(occupancy, Occupancy::default());
    }

    /// Tests the dashboard change indicators.
    ///
    /// Two customers joined in the current window against one in the prior window;
    /// one active visit existed at the window start and two are active now. A visit
    /// open at the window start but checked out since is left out of the baseline.
    ///
    /// Expected: "+100%" for both, "+1" for pending requests from a zero baseline
    #[tokio::test]
    async fn dashboard_compares_with_window_start() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let now = Utc::now();

        let old = factory::customer::CustomerFactory::new(db)
            .created_at(now - Duration::days(45))
            .build()
            .await
            .unwrap();
        for days_ago in [2, 5] {
            factory::customer::CustomerFactory::new(db)
                .created_at(now - Duration::days(days_ago))
                .build()
                .await
                .unwrap();
        }
        factory::visit::VisitFactory::new(db, old.id)
            .check_in_time(now - Duration::days(40))
            .build()
            .await
            .unwrap();
        factory::visit::VisitFactory::new(db, old.id)
            .check_in_time(now - Duration::days(40))
            .check_out_time(now - Duration::days(10))
            .build()
            .await
            .unwrap();
        factory::create_active_visit(db, old.id, "C1").await.unwrap();
        factory::create_service_request(db, old.id).await.unwrap();
        factory::create_dock(db).await.unwrap();

        let overview = AnalyticsService::new(db)
            .dashboard_overview_at(now)
            .await
            .unwrap();

        assert_eq!(overview.total_customers, 3);
        assert_eq!(overview.active_visits, 2);
        assert_eq!(overview.pending_requests, 1);
        assert_eq!(overview.unreviewed_feedback, 0);
        assert_eq!(overview.total_docks, 1);
        assert_eq!(overview.customers_change.value, "+100%");
        assert_eq!(overview.visits_change.value, "+100%");
        assert_eq!(overview.requests_change.value, "+1");
        assert_eq!(overview.feedback_change.value, "0%");
        assert_eq!(overview.feedback_change.change_type, ChangeType::Positive);
    }

    /// Tests revenue on an empty store.
    ///
    /// Expected: all zeros
    #[tokio::test]
    async fn revenue_with_no_visits_is_zero() {
        let test = TestBuilder::new().with_customer_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let revenue = AnalyticsService::new(db)
            .revenue(RevenueRange::default())
            .await
            .unwrap();

        assert_eq!(revenue.total_revenue, 0.0);
        assert_eq!(revenue.total_visits, 0);
        assert_eq!(revenue.average_revenue, 0.0);
    }

    /// Tests the monthly spending window and ordering.
    ///
    /// Expected: ascending months inside the window; null-cost records skipped
    #[tokio::test]
    async fn maintenance_series_is_ascending_within_window() {
        let test = TestBuilder::new()
            .with_maintenance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let now = Utc::now();
        let asset = factory::create_asset(db).await.unwrap();

        for (days_ago, cost) in [(10, Some(50.0)), (70, Some(25.0)), (75, None), (500, Some(1.0))] {
            let mut record = factory::maintenance_record::MaintenanceRecordFactory::new(db)
                .asset_id(asset.id)
                .completed_at(now - Duration::days(days_ago));
            if let Some(cost) = cost {
                record = record.actual_cost(cost);
            }
            record.build().await.unwrap();
        }

        let analytics = AnalyticsService::new(db)
            .maintenance_analytics_at(12, now)
            .await
            .unwrap();

        let total: u64 = analytics.maintenance_by_type.iter().map(|m| m.count).sum();
        assert_eq!(total, 3);

        let months: Vec<&str> = analytics
            .monthly_spending
            .iter()
            .map(|m| m.month.as_str())
            .collect();
        let mut sorted = months.clone();
        sorted.sort();
        assert_eq!(months, sorted);

        let spent: f64 = analytics.monthly_spending.iter().map(|m| m.total_cost).sum();
        assert_eq!(spent, 75.0);
        let counted: u64 = analytics.monthly_spending.iter().map(|m| m.count).sum();
        assert_eq!(counted, 2);
    }
}
