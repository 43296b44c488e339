use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::maintenance::MaintenanceRepository, error::AppError};

/// Every day at 08:00 UTC (sec min hour day month weekday).
const OVERDUE_CHECK_SCHEDULE: &str = "0 0 8 * * *";

/// Starts the overdue maintenance check.
///
/// The job counts SCHEDULED maintenance records whose date has passed and logs a
/// warning when there are any. Failures are logged and the job keeps its schedule.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it to shut it down on exit
/// - `Err(AppError::SchedulerErr)` - Job could not be created or started
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(OVERDUE_CHECK_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = check_overdue(&db, Utc::now()).await {
                tracing::error!("Error checking overdue maintenance: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Overdue maintenance scheduler started");

    Ok(scheduler)
}

/// Counts overdue maintenance as of `now`, warning when the count is non-zero.
async fn check_overdue(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<u64, AppError> {
    let overdue = MaintenanceRepository::new(db).count_overdue(now).await?;

    if overdue > 0 {
        tracing::warn!("{} maintenance record(s) are overdue", overdue);
    } else {
        tracing::debug!("No overdue maintenance");
    }

    Ok(overdue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use entity::sea_orm_active_enums::MaintenanceStatus;
    use test_utils::{builder::TestBuilder, factory::maintenance_record::MaintenanceRecordFactory};

    /// Expected: only SCHEDULED records dated before now are counted
    #[tokio::test]
    async fn counts_only_past_scheduled_records() {
        let test = TestBuilder::new().with_maintenance_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

        MaintenanceRecordFactory::new(db)
            .scheduled_date(now - Duration::days(3))
            .build()
            .await
            .unwrap();
        MaintenanceRecordFactory::new(db)
            .scheduled_date(now - Duration::days(10))
            .status(MaintenanceStatus::Completed)
            .completed_at(now - Duration::days(9))
            .build()
            .await
            .unwrap();
        MaintenanceRecordFactory::new(db)
            .scheduled_date(now + Duration::days(1))
            .build()
            .await
            .unwrap();

        assert_eq!(check_overdue(db, now).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_table_has_nothing_overdue() {
        let test = TestBuilder::new().with_maintenance_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert_eq!(check_overdue(db, Utc::now()).await.unwrap(), 0);
    }
}
