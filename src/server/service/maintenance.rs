//! Maintenance scheduling, overdue tracking and cost forecasting.

use chrono::{DateTime, Months, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{asset::AssetRepository, dock::DockRepository, maintenance::MaintenanceRepository},
    error::AppError,
    model::maintenance::{
        CreateMaintenanceRecordParams, MaintenanceCostPrediction, MaintenanceFilter,
        MaintenanceRecord, MaintenanceStats, UpdateMaintenanceRecordParams,
    },
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules maintenance against an asset, a dock or both.
    ///
    /// # Returns
    /// - `Ok(MaintenanceRecord)` - The created record
    /// - `Err(AppError::BadRequest)` - Referenced asset or dock does not exist
    pub async fn create(
        &self,
        params: CreateMaintenanceRecordParams,
    ) -> Result<MaintenanceRecord, AppError> {
        if let Some(asset_id) = params.asset_id {
            if AssetRepository::new(self.db).find_by_id(asset_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Asset {} does not exist",
                    asset_id
                )));
            }
        }
        if let Some(dock_id) = params.dock_id {
            if DockRepository::new(self.db).find_by_id(dock_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Dock {} does not exist",
                    dock_id
                )));
            }
        }

        Ok(MaintenanceRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(
        &self,
        filter: MaintenanceFilter,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(MaintenanceRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MaintenanceRecord, AppError> {
        MaintenanceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies an update. Moving to COMPLETED without a completion date stamps the
    /// current time.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMaintenanceRecordParams,
    ) -> Result<MaintenanceRecord, AppError> {
        let repo = MaintenanceRepository::new(self.db);
        let record = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        Ok(repo.update(record.merge(params, Utc::now())).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MaintenanceRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn upcoming(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(MaintenanceRepository::new(self.db)
            .get_upcoming(Utc::now())
            .await?)
    }

    pub async fn overdue(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(MaintenanceRepository::new(self.db)
            .get_overdue(Utc::now())
            .await?)
    }

    /// Number of SCHEDULED records whose date has passed. Used by the daily check job.
    pub async fn count_overdue(&self) -> Result<u64, AppError> {
        Ok(MaintenanceRepository::new(self.db)
            .count_overdue(Utc::now())
            .await?)
    }

    pub async fn stats(&self) -> Result<MaintenanceStats, AppError> {
        Ok(MaintenanceRepository::new(self.db).stats(Utc::now()).await?)
    }

    pub async fn predict_costs(&self, months: u32) -> Result<MaintenanceCostPrediction, AppError> {
        self.predict_costs_at(months, Utc::now()).await
    }

    /// Sums estimated costs of records scheduled within `[now, now + months]`.
    ///
    /// # Returns
    /// - `Ok(MaintenanceCostPrediction)` - Total and the records it covers
    /// - `Err(AppError::BadRequest)` - Horizon falls outside the representable range
    pub async fn predict_costs_at(
        &self,
        months: u32,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceCostPrediction, AppError> {
        let end = now.checked_add_months(Months::new(months)).ok_or_else(|| {
            AppError::BadRequest(format!("months value {} is out of range", months))
        })?;

        let records = MaintenanceRepository::new(self.db)
            .get_scheduled_between(now, end)
            .await?;

        Ok(MaintenanceCostPrediction::from_records(months, records))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Maintenance record {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
    use test_utils::{builder::TestBuilder, factory::maintenance_record::MaintenanceRecordFactory};

    fn params(asset_id: Option<i32>, dock_id: Option<i32>) -> CreateMaintenanceRecordParams {
        CreateMaintenanceRecordParams {
            asset_id,
            dock_id,
            maintenance_type: MaintenanceType::Preventive,
            title: "Replace pump seal".to_string(),
            description: "Seal is weeping".to_string(),
            status: MaintenanceStatus::Scheduled,
            scheduled_date: Utc::now() + Duration::days(3),
            assigned_to: None,
            estimated_cost: Some(80.0),
            notes: None,
        }
    }

    /// Expected: BadRequest when the referenced dock does not exist
    #[tokio::test]
    async fn create_requires_existing_target() {
        let test = TestBuilder::new().with_maintenance_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = MaintenanceService::new(db).create(params(None, Some(9))).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Expected: completing stamps completed_date and the record leaves the upcoming list
    #[tokio::test]
    async fn completing_record_stamps_date() {
        let test = TestBuilder::new().with_maintenance_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let asset = test_utils::factory::create_asset(db).await.unwrap();
        let service = MaintenanceService::new(db);

        let record = service.create(params(Some(asset.id), None)).await.unwrap();
        assert_eq!(service.upcoming().await.unwrap().len(), 1);

        let completed = service
            .update(
                record.id,
                UpdateMaintenanceRecordParams {
                    status: Some(MaintenanceStatus::Completed),
                    actual_cost: Some(95.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(completed.completed_date.is_some());
        assert!(service.upcoming().await.unwrap().is_empty());
    }

    /// Expected: only records inside the horizon are summed; missing estimates count as 0
    #[tokio::test]
    async fn predict_costs_sums_records_within_horizon() {
        let test = TestBuilder::new().with_maintenance_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        MaintenanceRecordFactory::new(db)
            .scheduled_date(now + Duration::days(10))
            .estimated_cost(200.0)
            .build()
            .await
            .unwrap();
        MaintenanceRecordFactory::new(db)
            .scheduled_date(now + Duration::days(40))
            .status(MaintenanceStatus::InProgress)
            .estimated_cost(150.5)
            .build()
            .await
            .unwrap();
        MaintenanceRecordFactory::new(db)
            .scheduled_date(now + Duration::days(50))
            .build()
            .await
            .unwrap();
        MaintenanceRecordFactory::new(db)
            .scheduled_date(now + Duration::days(200))
            .estimated_cost(999.0)
            .build()
            .await
            .unwrap();
        MaintenanceRecordFactory::new(db)
            .scheduled_date(now - Duration::days(1))
            .estimated_cost(500.0)
            .build()
            .await
            .unwrap();

        let prediction = MaintenanceService::new(db)
            .predict_costs_at(3, now)
            .await
            .unwrap();

        assert_eq!(prediction.months, 3);
        assert_eq!(prediction.breakdown.len(), 3);
        assert_eq!(prediction.estimated_cost, 350.5);
        assert!(prediction.breakdown[0].scheduled_date < prediction.breakdown[1].scheduled_date);
    }

    #[tokio::test]
    async fn predict_costs_with_nothing_scheduled_is_zero() {
        let test = TestBuilder::new().with_maintenance_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let prediction = MaintenanceService::new(db).predict_costs(6).await.unwrap();

        assert_eq!(prediction.estimated_cost, 0.0);
        assert!(prediction.breakdown.is_empty());
    }
}
