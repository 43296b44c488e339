//! Maintenance record domain models, parameters and cost summaries.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};

use crate::{
    model::maintenance::{
        CreateMaintenanceRecordDto, MaintenanceCostPredictionDto, MaintenanceRecordDto,
        MaintenanceStatsDto, MaintenanceTypeCountDto, UpdateMaintenanceRecordDto,
    },
    server::{
        error::AppError,
        model::analytics::round_half_up,
        util::validate::{require_non_empty, require_non_negative},
    },
};

/// Default look-ahead for cost prediction, in months.
pub const DEFAULT_PREDICTION_MONTHS: u32 = 6;

/// Scheduled or completed work on an asset, a dock, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    pub id: i32,
    pub asset_id: Option<i32>,
    pub dock_id: Option<i32>,
    pub maintenance_type: MaintenanceType,
    pub title: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub scheduled_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub work_performed: Option<String>,
    pub parts_replaced: Option<String>,
    pub notes: Option<String>,
    pub labor_hours: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    pub fn from_entity(entity: entity::maintenance_record::Model) -> Self {
        Self {
            id: entity.id,
            asset_id: entity.asset_id,
            dock_id: entity.dock_id,
            maintenance_type: entity.maintenance_type,
            title: entity.title,
            description: entity.description,
            status: entity.status,
            scheduled_date: entity.scheduled_date,
            completed_date: entity.completed_date,
            assigned_to: entity.assigned_to,
            estimated_cost: entity.estimated_cost,
            actual_cost: entity.actual_cost,
            work_performed: entity.work_performed,
            parts_replaced: entity.parts_replaced,
            notes: entity.notes,
            labor_hours: entity.labor_hours,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MaintenanceRecordDto {
        MaintenanceRecordDto {
            id: self.id,
            asset_id: self.asset_id,
            dock_id: self.dock_id,
            maintenance_type: self.maintenance_type.into(),
            title: self.title,
            description: self.description,
            status: self.status.into(),
            scheduled_date: self.scheduled_date,
            completed_date: self.completed_date,
            assigned_to: self.assigned_to,
            estimated_cost: self.estimated_cost,
            actual_cost: self.actual_cost,
            work_performed: self.work_performed,
            parts_replaced: self.parts_replaced,
            notes: self.notes,
            labor_hours: self.labor_hours,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies the whitelisted update fields.
    ///
    /// Moving to COMPLETED without an explicit completion date stamps `now`.
    pub fn merge(self, params: UpdateMaintenanceRecordParams, now: DateTime<Utc>) -> Self {
        let status = params.status.unwrap_or(self.status);
        let mut completed_date = params.completed_date.or(self.completed_date);
        if status == MaintenanceStatus::Completed && completed_date.is_none() {
            completed_date = Some(now);
        }

        Self {
            maintenance_type: params.maintenance_type.unwrap_or(self.maintenance_type),
            title: params.title.unwrap_or(self.title),
            description: params.description.unwrap_or(self.description),
            status,
            scheduled_date: params.scheduled_date.unwrap_or(self.scheduled_date),
            completed_date,
            assigned_to: params.assigned_to.or(self.assigned_to),
            estimated_cost: params.estimated_cost.or(self.estimated_cost),
            actual_cost: params.actual_cost.or(self.actual_cost),
            work_performed: params.work_performed.or(self.work_performed),
            parts_replaced: params.parts_replaced.or(self.parts_replaced),
            notes: params.notes.or(self.notes),
            labor_hours: params.labor_hours.or(self.labor_hours),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenanceFilter {
    pub asset_id: Option<i32>,
    pub status: Option<MaintenanceStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceStats {
    pub total: u64,
    pub upcoming: u64,
    pub overdue: u64,
    pub by_type: Vec<(MaintenanceType, u64)>,
    pub total_cost: f64,
}

impl MaintenanceStats {
    pub fn into_dto(self) -> MaintenanceStatsDto {
        MaintenanceStatsDto {
            total: self.total,
            upcoming: self.upcoming,
            overdue: self.overdue,
            by_type: self
                .by_type
                .into_iter()
                .map(|(maintenance_type, count)| MaintenanceTypeCountDto {
                    maintenance_type: maintenance_type.into(),
                    count,
                })
                .collect(),
            total_cost: round_half_up(self.total_cost, 2),
        }
    }
}

/// Estimated spend on work scheduled over the coming months.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceCostPrediction {
    pub months: u32,
    pub estimated_cost: f64,
    pub breakdown: Vec<MaintenanceRecord>,
}

impl MaintenanceCostPrediction {
    /// Sums estimated costs, counting a missing estimate as zero.
    pub fn from_records(months: u32, breakdown: Vec<MaintenanceRecord>) -> Self {
        let estimated_cost = breakdown
            .iter()
            .map(|record| record.estimated_cost.unwrap_or(0.0))
            .sum();

        Self {
            months,
            estimated_cost,
            breakdown,
        }
    }

    pub fn into_dto(self) -> MaintenanceCostPredictionDto {
        MaintenanceCostPredictionDto {
            months: self.months,
            upcoming_count: self.breakdown.len() as u64,
            estimated_cost: round_half_up(self.estimated_cost, 2),
            breakdown: self
                .breakdown
                .into_iter()
                .map(MaintenanceRecord::into_dto)
                .collect(),
        }
    }
}

fn validate_costs(estimated: Option<f64>, actual: Option<f64>) -> Result<(), AppError> {
    require_non_negative("estimatedCost", estimated)?;
    require_non_negative("actualCost", actual)
}

#[derive(Debug, Clone)]
pub struct CreateMaintenanceRecordParams {
    pub asset_id: Option<i32>,
    pub dock_id: Option<i32>,
    pub maintenance_type: MaintenanceType,
    pub title: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub scheduled_date: DateTime<Utc>,
    pub assigned_to: Option<String>,
    pub estimated_cost: Option<f64>,
    pub notes: Option<String>,
}

impl CreateMaintenanceRecordParams {
    /// Validates the request body; status defaults to SCHEDULED.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Neither `assetId` nor `dockId` given, empty
    ///   title or description, or a negative estimate
    pub fn from_dto(dto: CreateMaintenanceRecordDto) -> Result<Self, AppError> {
        if dto.asset_id.is_none() && dto.dock_id.is_none() {
            return Err(AppError::BadRequest(
                "Either assetId or dockId is required".to_string(),
            ));
        }
        require_non_empty("title", &dto.title)?;
        require_non_empty("description", &dto.description)?;
        validate_costs(dto.estimated_cost, None)?;

        Ok(Self {
            asset_id: dto.asset_id,
            dock_id: dto.dock_id,
            maintenance_type: dto.maintenance_type.into(),
            title: dto.title.trim().to_string(),
            description: dto.description,
            status: dto
                .status
                .map(Into::into)
                .unwrap_or(MaintenanceStatus::Scheduled),
            scheduled_date: dto.scheduled_date,
            assigned_to: dto.assigned_to,
            estimated_cost: dto.estimated_cost,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMaintenanceRecordParams {
    pub maintenance_type: Option<MaintenanceType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<MaintenanceStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub work_performed: Option<String>,
    pub parts_replaced: Option<String>,
    pub notes: Option<String>,
    pub labor_hours: Option<i32>,
}

impl UpdateMaintenanceRecordParams {
    pub fn from_dto(dto: UpdateMaintenanceRecordDto) -> Result<Self, AppError> {
        if let Some(title) = &dto.title {
            require_non_empty("title", title)?;
        }
        if let Some(description) = &dto.description {
            require_non_empty("description", description)?;
        }
        validate_costs(dto.estimated_cost, dto.actual_cost)?;
        require_non_negative("laborHours", dto.labor_hours.map(f64::from))?;

        Ok(Self {
            maintenance_type: dto.maintenance_type.map(Into::into),
            title: dto.title.map(|v| v.trim().to_string()),
            description: dto.description,
            status: dto.status.map(Into::into),
            scheduled_date: dto.scheduled_date,
            completed_date: dto.completed_date,
            assigned_to: dto.assigned_to,
            estimated_cost: dto.estimated_cost,
            actual_cost: dto.actual_cost,
            work_performed: dto.work_performed,
            parts_replaced: dto.parts_replaced,
            notes: dto.notes,
            labor_hours: dto.labor_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::maintenance::MaintenanceTypeDto;
    use chrono::TimeZone;

    fn record(estimated_cost: Option<f64>) -> MaintenanceRecord {
        let at = Utc.with_ymd_and_hms(2024, 8, 1, 8, 0, 0).unwrap();
        MaintenanceRecord {
            id: 1,
            asset_id: Some(1),
            dock_id: None,
            maintenance_type: MaintenanceType::Routine,
            title: "Inspect cleats".to_string(),
            description: "Quarterly inspection".to_string(),
            status: MaintenanceStatus::Scheduled,
            scheduled_date: at,
            completed_date: None,
            assigned_to: None,
            estimated_cost,
            actual_cost: None,
            work_performed: None,
            parts_replaced: None,
            notes: None,
            labor_hours: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn create_dto() -> CreateMaintenanceRecordDto {
        CreateMaintenanceRecordDto {
            asset_id: None,
            dock_id: Some(4),
            maintenance_type: MaintenanceTypeDto::Preventive,
            title: "Replace bumpers".to_string(),
            description: "Worn bumpers on the east side".to_string(),
            status: None,
            scheduled_date: Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap(),
            assigned_to: None,
            estimated_cost: Some(300.0),
            notes: None,
        }
    }

    #[test]
    fn create_requires_asset_or_dock() {
        let params = CreateMaintenanceRecordParams::from_dto(create_dto()).unwrap();
        assert_eq!(params.status, MaintenanceStatus::Scheduled);

        let orphan = CreateMaintenanceRecordDto {
            dock_id: None,
            ..create_dto()
        };
        assert!(matches!(
            CreateMaintenanceRecordParams::from_dto(orphan),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn completing_stamps_completed_date() {
        let now = Utc.with_ymd_and_hms(2024, 8, 2, 12, 0, 0).unwrap();

        let merged = record(None).merge(
            UpdateMaintenanceRecordParams {
                status: Some(MaintenanceStatus::Completed),
                actual_cost: Some(45.0),
                ..Default::default()
            },
            now,
        );

        assert_eq!(merged.completed_date, Some(now));
        assert_eq!(merged.actual_cost, Some(45.0));
    }

    #[test]
    fn prediction_treats_missing_estimates_as_zero() {
        let prediction = MaintenanceCostPrediction::from_records(
            3,
            vec![record(Some(100.25)), record(None), record(Some(50.0))],
        )
        .into_dto();

        assert_eq!(prediction.months, 3);
        assert_eq!(prediction.upcoming_count, 3);
        assert_eq!(prediction.estimated_cost, 150.25);
        assert_eq!(prediction.breakdown.len(), 3);
    }
}
