//! Visit domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::visit::{CreateVisitDto, UpdateVisitDto, VisitDto},
    server::{
        error::AppError,
        util::validate::{require_non_empty, require_non_negative},
    },
};

/// A boat's stay at a dock. Active while `check_out_time` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: i32,
    pub customer_id: i32,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub dock_number: String,
    pub boat_name: Option<String>,
    pub boat_type: Option<String>,
    pub service_charges: f64,
    pub services_used: Option<Value>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Visit {
    pub fn from_entity(entity: entity::visit::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            check_in_time: entity.check_in_time,
            check_out_time: entity.check_out_time,
            dock_number: entity.dock_number,
            boat_name: entity.boat_name,
            boat_type: entity.boat_type,
            service_charges: entity.service_charges,
            services_used: entity.services_used,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> VisitDto {
        VisitDto {
            id: self.id,
            customer_id: self.customer_id,
            check_in_time: self.check_in_time,
            check_out_time: self.check_out_time,
            dock_number: self.dock_number,
            boat_name: self.boat_name,
            boat_type: self.boat_type,
            service_charges: self.service_charges,
            services_used: self.services_used,
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    /// Applies the whitelisted update fields and re-checks the stay interval.
    ///
    /// # Returns
    /// - `Ok(Visit)` - Updated visit
    /// - `Err(AppError::BadRequest)` - New checkout precedes check-in
    pub fn merge(self, params: UpdateVisitParams) -> Result<Self, AppError> {
        let merged = Self {
            check_out_time: params.check_out_time.or(self.check_out_time),
            dock_number: params.dock_number.unwrap_or(self.dock_number),
            boat_name: params.boat_name.or(self.boat_name),
            boat_type: params.boat_type.or(self.boat_type),
            service_charges: params.service_charges.unwrap_or(self.service_charges),
            services_used: params.services_used.or(self.services_used),
            notes: params.notes.or(self.notes),
            ..self
        };

        validate_interval(merged.check_in_time, merged.check_out_time)?;

        Ok(merged)
    }
}

fn validate_interval(
    check_in: DateTime<Utc>,
    check_out: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    match check_out {
        Some(out) if out < check_in => Err(AppError::BadRequest(
            "checkOutTime must not precede checkInTime".to_string(),
        )),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct CreateVisitParams {
    pub customer_id: i32,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub dock_number: String,
    pub boat_name: Option<String>,
    pub boat_type: Option<String>,
    pub service_charges: f64,
    pub services_used: Option<Value>,
    pub notes: Option<String>,
}

impl CreateVisitParams {
    /// Validates the request body; a missing check-in time defaults to `now`.
    pub fn from_dto(dto: CreateVisitDto, now: DateTime<Utc>) -> Result<Self, AppError> {
        require_non_empty("dockNumber", &dto.dock_number)?;
        require_non_negative("serviceCharges", dto.service_charges)?;

        let check_in_time = dto.check_in_time.unwrap_or(now);
        validate_interval(check_in_time, dto.check_out_time)?;

        Ok(Self {
            customer_id: dto.customer_id,
            check_in_time,
            check_out_time: dto.check_out_time,
            dock_number: dto.dock_number.trim().to_string(),
            boat_name: dto.boat_name,
            boat_type: dto.boat_type,
            service_charges: dto.service_charges.unwrap_or(0.0),
            services_used: dto.services_used,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateVisitParams {
    pub check_out_time: Option<DateTime<Utc>>,
    pub dock_number: Option<String>,
    pub boat_name: Option<String>,
    pub boat_type: Option<String>,
    pub service_charges: Option<f64>,
    pub services_used: Option<Value>,
    pub notes: Option<String>,
}

impl UpdateVisitParams {
    pub fn from_dto(dto: UpdateVisitDto) -> Result<Self, AppError> {
        if let Some(dock_number) = &dto.dock_number {
            require_non_empty("dockNumber", dock_number)?;
        }
        require_non_negative("serviceCharges", dto.service_charges)?;

        Ok(Self {
            check_out_time: dto.check_out_time,
            dock_number: dto.dock_number.map(|v| v.trim().to_string()),
            boat_name: dto.boat_name,
            boat_type: dto.boat_type,
            service_charges: dto.service_charges,
            services_used: dto.services_used,
            notes: dto.notes,
        })
    }
}
