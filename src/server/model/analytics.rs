//! Analytics domain models and the pure calculations behind them.
//!
//! Counting and grouping happen in the database; the arithmetic that turns those
//! counts into percentages and rates lives here so it can be tested without a
//! database. Every type converts into its response DTO with `into_dto`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{
    DockStatus, MaintenanceType, MembershipTier, ServiceRequestStatus,
};

use crate::model::analytics::{
    ChangeTypeDto, CustomerInsightsDto, DashboardOverviewDto, MaintenanceAnalyticsDto,
    MaintenanceByTypeDto, MembershipCountDto, MonthlySpendingDto, OccupancyDto,
    RequestsByStatusDto, RequestsByTypeDto, RevenueAnalyticsDto, ServiceAnalyticsDto,
    TopCustomerDto,
};

/// Direction tag attached to a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Positive,
    Negative,
}

impl From<ChangeType> for ChangeTypeDto {
    fn from(value: ChangeType) -> Self {
        match value {
            ChangeType::Positive => ChangeTypeDto::Positive,
            ChangeType::Negative => ChangeTypeDto::Negative,
        }
    }
}

/// Formatted period-over-period change such as `"+50%"` or `"-12.5%"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeIndicator {
    pub value: String,
    pub change_type: ChangeType,
}

/// Rounds half up to the given number of decimal places.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor + 0.5).floor() / factor;

    // -0.0 would otherwise print as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Computes the change indicator between a current value and its baseline.
///
/// A zero baseline cannot produce a percentage: any current value is reported as an
/// absolute `"+{current}"`, and zero against zero as `"0%"`. Otherwise the relative
/// change is rounded to one decimal; integral results print without a decimal point.
///
/// # Arguments
/// - `current` - Value now
/// - `previous` - Value at the start of the comparison window
///
/// # Returns
/// - `ChangeIndicator` - Signed display string and direction
pub fn calculate_change(current: u64, previous: u64) -> ChangeIndicator {
    if previous == 0 {
        let value = if current > 0 {
            format!("+{}", current)
        } else {
            "0%".to_string()
        };

        return ChangeIndicator {
            value,
            change_type: ChangeType::Positive,
        };
    }

    let raw = (current as f64 - previous as f64) / previous as f64 * 100.0;
    let change = round_half_up(raw, 1);

    if change >= 0.0 {
        ChangeIndicator {
            value: format!("+{}%", change),
            change_type: ChangeType::Positive,
        }
    } else {
        ChangeIndicator {
            value: format!("{}%", change),
            change_type: ChangeType::Negative,
        }
    }
}

/// Point-in-time dashboard counters with 30-day change indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub total_customers: u64,
    pub active_visits: u64,
    pub pending_requests: u64,
    pub unreviewed_feedback: u64,
    pub total_docks: u64,
    pub customers_change: ChangeIndicator,
    pub visits_change: ChangeIndicator,
    pub requests_change: ChangeIndicator,
    pub feedback_change: ChangeIndicator,
}

impl DashboardOverview {
    pub fn into_dto(self) -> DashboardOverviewDto {
        DashboardOverviewDto {
            total_customers: self.total_customers,
            active_visits: self.active_visits,
            pending_requests: self.pending_requests,
            unreviewed_feedback: self.unreviewed_feedback,
            total_docks: self.total_docks,
            customers_change: self.customers_change.value,
            customers_change_type: self.customers_change.change_type.into(),
            visits_change: self.visits_change.value,
            visits_change_type: self.visits_change.change_type.into(),
            requests_change: self.requests_change.value,
            requests_change_type: self.requests_change.change_type.into(),
            feedback_change: self.feedback_change.value,
            feedback_change_type: self.feedback_change.change_type.into(),
        }
    }
}

/// Inclusive check-in bounds for revenue queries; `None` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RevenueRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Aggregated visit charges over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    pub total_visits: u64,
    pub average_revenue: f64,
}

impl RevenueSummary {
    /// Builds the summary from a visit count and the summed charges.
    ///
    /// A missing sum (no matching rows) reads as zero, and the average is zero when
    /// there are no visits.
    pub fn from_totals(total_visits: u64, total_revenue: Option<f64>) -> Self {
        let total_revenue = total_revenue.unwrap_or(0.0);
        let average_revenue = if total_visits > 0 {
            total_revenue / total_visits as f64
        } else {
            0.0
        };

        Self {
            total_revenue,
            total_visits,
            average_revenue,
        }
    }

    pub fn into_dto(self) -> RevenueAnalyticsDto {
        RevenueAnalyticsDto {
            total_revenue: self.total_revenue,
            total_visits: self.total_visits,
            average_revenue: self.average_revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MembershipCount {
    pub tier: MembershipTier,
    pub count: u64,
}

/// Customer ranked by number of visits.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCustomer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub membership_tier: MembershipTier,
    pub visit_count: u64,
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInsights {
    pub membership_distribution: Vec<MembershipCount>,
    pub top_customers: Vec<TopCustomer>,
}

impl CustomerInsights {
    pub fn into_dto(self) -> CustomerInsightsDto {
        CustomerInsightsDto {
            membership_distribution: self
                .membership_distribution
                .into_iter()
                .map(|m| MembershipCountDto {
                    tier: m.tier.into(),
                    count: m.count,
                })
                .collect(),
            top_customers: self
                .top_customers
                .into_iter()
                .map(|c| TopCustomerDto {
                    id: c.id,
                    first_name: c.first_name,
                    last_name: c.last_name,
                    membership_tier: c.membership_tier.into(),
                    visit_count: c.visit_count,
                    total_spent: c.total_spent,
                })
                .collect(),
        }
    }
}

/// Mean of the non-null values that contributed to `sum`, or 0 when there were none.
pub fn mean_or_zero(sum: Option<f64>, non_null_count: u64) -> f64 {
    match sum {
        Some(total) if non_null_count > 0 => total / non_null_count as f64,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestsByType {
    pub service_type: String,
    pub count: u64,
    pub avg_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestsByStatus {
    pub status: ServiceRequestStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceAnalytics {
    pub requests_by_type: Vec<RequestsByType>,
    pub requests_by_status: Vec<RequestsByStatus>,
}

impl ServiceAnalytics {
    pub fn into_dto(self) -> ServiceAnalyticsDto {
        ServiceAnalyticsDto {
            requests_by_type: self
                .requests_by_type
                .into_iter()
                .map(|r| RequestsByTypeDto {
                    service_type: r.service_type,
                    count: r.count,
                    avg_cost: r.avg_cost,
                })
                .collect(),
            requests_by_status: self
                .requests_by_status
                .into_iter()
                .map(|r| RequestsByStatusDto {
                    status: r.status.into(),
                    count: r.count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceByType {
    pub maintenance_type: MaintenanceType,
    pub count: u64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySpending {
    /// Calendar month formatted as `YYYY-MM`.
    pub month: String,
    pub total_cost: f64,
    pub count: u64,
}

/// Buckets completed maintenance costs by calendar month, ascending.
///
/// # Arguments
/// - `completed` - `(completed_date, actual_cost)` pairs; rows without a cost must
///   already be excluded
///
/// # Returns
/// - `Vec<MonthlySpending>` - One entry per month that has at least one record
pub fn monthly_spending(completed: Vec<(DateTime<Utc>, f64)>) -> Vec<MonthlySpending> {
    let mut buckets: std::collections::BTreeMap<String, (f64, u64)> =
        std::collections::BTreeMap::new();

    for (completed_date, cost) in completed {
        let bucket = buckets
            .entry(completed_date.format("%Y-%m").to_string())
            .or_insert((0.0, 0));
        bucket.0 += cost;
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(month, (total_cost, count))| MonthlySpending {
            month,
            total_cost,
            count,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceAnalytics {
    pub maintenance_by_type: Vec<MaintenanceByType>,
    pub monthly_spending: Vec<MonthlySpending>,
}

impl MaintenanceAnalytics {
    pub fn into_dto(self) -> MaintenanceAnalyticsDto {
        MaintenanceAnalyticsDto {
            maintenance_by_type: self
                .maintenance_by_type
                .into_iter()
                .map(|m| MaintenanceByTypeDto {
                    maintenance_type: m.maintenance_type.into(),
                    count: m.count,
                    total_cost: m.total_cost,
                })
                .collect(),
            monthly_spending: self
                .monthly_spending
                .into_iter()
                .map(|m| MonthlySpendingDto {
                    month: m.month,
                    total_cost: m.total_cost,
                    count: m.count,
                })
                .collect(),
        }
    }
}

/// Dock occupancy after reconciling dock status with active visits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Occupancy {
    pub total_docks: u64,
    pub occupied_docks: u64,
    pub available_docks: u64,
    pub maintenance_docks: u64,
    pub out_of_service_docks: u64,
    pub occupancy_rate: f64,
}

impl Occupancy {
    pub fn into_dto(self) -> OccupancyDto {
        OccupancyDto {
            total_docks: self.total_docks,
            occupied_docks: self.occupied_docks,
            available_docks: self.available_docks,
            maintenance_docks: self.maintenance_docks,
            out_of_service_docks: self.out_of_service_docks,
            occupancy_rate: self.occupancy_rate,
        }
    }
}

/// Reconciles dock statuses with active visits into an occupancy snapshot.
///
/// A dock is occupied when its status says so or when an active visit references it,
/// counted once either way. Visits naming a dock number that does not exist are
/// ignored. Docks under maintenance or out of service are excluded from the rate's
/// denominator, so the rate reflects only docks that could hold a boat.
///
/// # Arguments
/// - `docks` - Every dock as `(dock_number, status)`
/// - `active_visit_docks` - Dock numbers referenced by visits with no checkout
///
/// # Returns
/// - `Occupancy` - All zeros when there are no docks; otherwise counts and a rate in
///   `[0, 100]` rounded to two decimals
pub fn compute_occupancy(
    docks: &[(String, DockStatus)],
    active_visit_docks: &[String],
) -> Occupancy {
    if docks.is_empty() {
        return Occupancy::default();
    }

    let total_docks = docks.len() as u64;
    let valid: HashSet<&str> = docks.iter().map(|(number, _)| number.as_str()).collect();
    let visited: HashSet<&str> = active_visit_docks
        .iter()
        .map(String::as_str)
        .filter(|number| valid.contains(number))
        .collect();

    let mut maintenance_docks = 0u64;
    let mut out_of_service_docks = 0u64;
    let mut available_docks = 0u64;
    let mut occupied: HashSet<&str> = visited.clone();

    for (number, status) in docks {
        match status {
            DockStatus::Maintenance => maintenance_docks += 1,
            DockStatus::OutOfService => out_of_service_docks += 1,
            DockStatus::Occupied => {
                occupied.insert(number.as_str());
            }
            DockStatus::Available => {
                if !visited.contains(number.as_str()) {
                    available_docks += 1;
                }
            }
        }
    }

    let occupied_docks = (occupied.len() as u64).min(total_docks);
    let operational = total_docks as i64 - maintenance_docks as i64 - out_of_service_docks as i64;

    let occupancy_rate = if operational <= 0 {
        0.0
    } else {
        round_half_up(occupied_docks as f64 / operational as f64 * 100.0, 2).min(100.0)
    };

    Occupancy {
        total_docks,
        occupied_docks,
        available_docks,
        maintenance_docks,
        out_of_service_docks,
        occupancy_rate,
    }
}
