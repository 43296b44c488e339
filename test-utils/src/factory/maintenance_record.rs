//! Maintenance record factory for creating test maintenance entities.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test maintenance records with customizable fields.
///
/// Neither an asset nor a dock is linked by default; set one with `asset_id` or
/// `dock_id` when the test needs the relation.
pub struct MaintenanceRecordFactory<'a> {
    db: &'a DatabaseConnection,
    asset_id: Option<i32>,
    dock_id: Option<i32>,
    maintenance_type: MaintenanceType,
    title: String,
    status: MaintenanceStatus,
    scheduled_date: DateTime<Utc>,
    completed_date: Option<DateTime<Utc>>,
    estimated_cost: Option<f64>,
    actual_cost: Option<f64>,
}

impl<'a> MaintenanceRecordFactory<'a> {
    /// Creates a new MaintenanceRecordFactory with default values.
    ///
    /// Defaults:
    /// - maintenance_type: `Routine`
    /// - status: `Scheduled`
    /// - scheduled_date: seven days from now
    /// - completed_date and costs: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            asset_id: None,
            dock_id: None,
            maintenance_type: MaintenanceType::Routine,
            title: "Routine inspection".to_string(),
            status: MaintenanceStatus::Scheduled,
            scheduled_date: Utc::now() + Duration::days(7),
            completed_date: None,
            estimated_cost: None,
            actual_cost: None,
        }
    }

    pub fn asset_id(mut self, asset_id: i32) -> Self {
        self.asset_id = Some(asset_id);
        self
    }

    pub fn dock_id(mut self, dock_id: i32) -> Self {
        self.dock_id = Some(dock_id);
        self
    }

    pub fn maintenance_type(mut self, maintenance_type: MaintenanceType) -> Self {
        self.maintenance_type = maintenance_type;
        self
    }

    pub fn status(mut self, status: MaintenanceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn scheduled_date(mut self, scheduled_date: DateTime<Utc>) -> Self {
        self.scheduled_date = scheduled_date;
        self
    }

    /// Marks the record completed at the given time.
    pub fn completed_at(mut self, completed_date: DateTime<Utc>) -> Self {
        self.status = MaintenanceStatus::Completed;
        self.completed_date = Some(completed_date);
        self
    }

    pub fn estimated_cost(mut self, cost: f64) -> Self {
        self.estimated_cost = Some(cost);
        self
    }

    pub fn actual_cost(mut self, cost: f64) -> Self {
        self.actual_cost = Some(cost);
        self
    }

    /// Builds and inserts the maintenance record into the database.
    pub async fn build(self) -> Result<entity::maintenance_record::Model, DbErr> {
        let now = Utc::now();
        entity::maintenance_record::ActiveModel {
            asset_id: ActiveValue::Set(self.asset_id),
            dock_id: ActiveValue::Set(self.dock_id),
            maintenance_type: ActiveValue::Set(self.maintenance_type),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Scheduled work".to_string()),
            status: ActiveValue::Set(self.status),
            scheduled_date: ActiveValue::Set(self.scheduled_date),
            completed_date: ActiveValue::Set(self.completed_date),
            assigned_to: ActiveValue::Set(None),
            estimated_cost: ActiveValue::Set(self.estimated_cost),
            actual_cost: ActiveValue::Set(self.actual_cost),
            work_performed: ActiveValue::Set(None),
            parts_replaced: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            labor_hours: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled routine maintenance record for the given asset.
pub async fn create_maintenance_record(
    db: &DatabaseConnection,
    asset_id: i32,
) -> Result<entity::maintenance_record::Model, DbErr> {
    MaintenanceRecordFactory::new(db)
        .asset_id(asset_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::asset::create_asset};

    #[tokio::test]
    async fn creates_scheduled_record_for_asset() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_maintenance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let asset = create_asset(db).await?;
        let record = create_maintenance_record(db, asset.id).await?;

        assert_eq!(record.asset_id, Some(asset.id));
        assert_eq!(record.status, MaintenanceStatus::Scheduled);
        assert!(record.completed_date.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn completed_at_sets_status_and_date() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_maintenance_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let asset = create_asset(db).await?;
        let done = Utc::now();
        let record = MaintenanceRecordFactory::new(db)
            .asset_id(asset.id)
            .completed_at(done)
            .actual_cost(120.0)
            .build()
            .await?;

        assert_eq!(record.status, MaintenanceStatus::Completed);
        assert!(record.completed_date.is_some());
        assert_eq!(record.actual_cost, Some(120.0));

        Ok(())
    }
}
