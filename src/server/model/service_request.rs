//! Service request domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ServiceRequestPriority, ServiceRequestStatus};

use crate::{
    model::service_request::{
        CreateServiceRequestDto, ServiceRequestDto, UpdateServiceRequestDto,
    },
    server::{
        error::AppError,
        util::validate::{require_non_empty, require_non_negative},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub id: i32,
    pub customer_id: i32,
    pub service_type: String,
    pub description: String,
    pub title: Option<String>,
    pub status: ServiceRequestStatus,
    pub priority: ServiceRequestPriority,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub requested_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceRequest {
    pub fn from_entity(entity: entity::service_request::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            service_type: entity.service_type,
            description: entity.description,
            title: entity.title,
            status: entity.status,
            priority: entity.priority,
            scheduled_date: entity.scheduled_date,
            requested_date: entity.requested_date,
            completed_date: entity.completed_date,
            estimated_cost: entity.estimated_cost,
            actual_cost: entity.actual_cost,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ServiceRequestDto {
        ServiceRequestDto {
            id: self.id,
            customer_id: self.customer_id,
            service_type: self.service_type,
            description: self.description,
            title: self.title,
            status: self.status.into(),
            priority: self.priority.into(),
            scheduled_date: self.scheduled_date,
            requested_date: self.requested_date,
            completed_date: self.completed_date,
            estimated_cost: self.estimated_cost,
            actual_cost: self.actual_cost,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Applies the whitelisted update fields.
    ///
    /// Moving to COMPLETED without an explicit completion date stamps `now`.
    pub fn merge(self, params: UpdateServiceRequestParams, now: DateTime<Utc>) -> Self {
        let status = params.status.unwrap_or(self.status);
        let mut completed_date = params.completed_date.or(self.completed_date);
        if status == ServiceRequestStatus::Completed && completed_date.is_none() {
            completed_date = Some(now);
        }

        Self {
            service_type: params.service_type.unwrap_or(self.service_type),
            description: params.description.unwrap_or(self.description),
            title: params.title.or(self.title),
            status,
            priority: params.priority.unwrap_or(self.priority),
            scheduled_date: params.scheduled_date.or(self.scheduled_date),
            requested_date: params.requested_date.or(self.requested_date),
            completed_date,
            estimated_cost: params.estimated_cost.or(self.estimated_cost),
            actual_cost: params.actual_cost.or(self.actual_cost),
            notes: params.notes.or(self.notes),
            ..self
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceRequestParams {
    pub customer_id: i32,
    pub service_type: String,
    pub description: String,
    pub title: Option<String>,
    pub status: ServiceRequestStatus,
    pub priority: ServiceRequestPriority,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub requested_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<f64>,
    pub notes: Option<String>,
}

impl CreateServiceRequestParams {
    /// Validates the request body. Defaults: PENDING, MEDIUM priority.
    pub fn from_dto(dto: CreateServiceRequestDto) -> Result<Self, AppError> {
        require_non_empty("serviceType", &dto.service_type)?;
        require_non_empty("description", &dto.description)?;
        require_non_negative("estimatedCost", dto.estimated_cost)?;

        Ok(Self {
            customer_id: dto.customer_id,
            service_type: dto.service_type.trim().to_string(),
            description: dto.description,
            title: dto.title,
            status: dto
                .status
                .map(Into::into)
                .unwrap_or(ServiceRequestStatus::Pending),
            priority: dto
                .priority
                .map(Into::into)
                .unwrap_or(ServiceRequestPriority::Medium),
            scheduled_date: dto.scheduled_date,
            requested_date: dto.requested_date,
            estimated_cost: dto.estimated_cost,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceRequestParams {
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub title: Option<String>,
    pub status: Option<ServiceRequestStatus>,
    pub priority: Option<ServiceRequestPriority>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub requested_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub notes: Option<String>,
}

impl UpdateServiceRequestParams {
    pub fn from_dto(dto: UpdateServiceRequestDto) -> Result<Self, AppError> {
        if let Some(service_type) = &dto.service_type {
            require_non_empty("serviceType", service_type)?;
        }
        if let Some(description) = &dto.description {
            require_non_empty("description", description)?;
        }
        require_non_negative("estimatedCost", dto.estimated_cost)?;
        require_non_negative("actualCost", dto.actual_cost)?;

        Ok(Self {
            service_type: dto.service_type.map(|v| v.trim().to_string()),
            description: dto.description,
            title: dto.title,
            status: dto.status.map(Into::into),
            priority: dto.priority.map(Into::into),
            scheduled_date: dto.scheduled_date,
            requested_date: dto.requested_date,
            completed_date: dto.completed_date,
            estimated_cost: dto.estimated_cost,
            actual_cost: dto.actual_cost,
            notes: dto.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request() -> ServiceRequest {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        ServiceRequest {
            id: 7,
            customer_id: 1,
            service_type: "Fuel".to_string(),
            description: "Top up diesel".to_string(),
            title: None,
            status: ServiceRequestStatus::Pending,
            priority: ServiceRequestPriority::Medium,
            scheduled_date: None,
            requested_date: None,
            completed_date: None,
            estimated_cost: Some(80.0),
            actual_cost: None,
            notes: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn completing_stamps_completed_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 15, 0, 0).unwrap();

        let merged = request().merge(
            UpdateServiceRequestParams {
                status: Some(ServiceRequestStatus::Completed),
                actual_cost: Some(95.5),
                ..Default::default()
            },
            now,
        );

        assert_eq!(merged.completed_date, Some(now));
        assert_eq!(merged.actual_cost, Some(95.5));
        assert_eq!(merged.estimated_cost, Some(80.0));
    }

    #[test]
    fn explicit_completed_date_is_kept() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 15, 0, 0).unwrap();
        let done = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();

        let merged = request().merge(
            UpdateServiceRequestParams {
                status: Some(ServiceRequestStatus::Completed),
                completed_date: Some(done),
                ..Default::default()
            },
            now,
        );

        assert_eq!(merged.completed_date, Some(done));
    }

    #[test]
    fn in_progress_leaves_completed_date_empty() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 15, 0, 0).unwrap();

        let merged = request().merge(
            UpdateServiceRequestParams {
                status: Some(ServiceRequestStatus::InProgress),
                ..Default::default()
            },
            now,
        );

        assert_eq!(merged.completed_date, None);
    }
}
