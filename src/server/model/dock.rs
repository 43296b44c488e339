//! Dock domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{DockSize, DockStatus};
use serde_json::Value;

use crate::{
    model::dock::{
        CreateDockDto, DockDto, DockSizeCountDto, DockStatsDto, DockStatusCountDto,
        UpdateDockDto,
    },
    server::{
        error::AppError,
        util::validate::{require_non_empty, require_non_negative},
    },
};

/// A berth at the marina.
#[derive(Debug, Clone, PartialEq)]
pub struct Dock {
    pub id: i32,
    pub dock_number: String,
    pub name: String,
    pub size: DockSize,
    pub status: DockStatus,
    pub location: Option<String>,
    pub description: Option<String>,
    pub max_boat_length: Option<f64>,
    pub depth: Option<f64>,
    pub power_amperage: Option<i32>,
    pub has_water: bool,
    pub has_sewage: bool,
    pub has_fuel: bool,
    pub amenities: Option<Value>,
    pub built_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dock {
    pub fn from_entity(entity: entity::dock::Model) -> Self {
        Self {
            id: entity.id,
            dock_number: entity.dock_number,
            name: entity.name,
            size: entity.size,
            status: entity.status,
            location: entity.location,
            description: entity.description,
            max_boat_length: entity.max_boat_length,
            depth: entity.depth,
            power_amperage: entity.power_amperage,
            has_water: entity.has_water,
            has_sewage: entity.has_sewage,
            has_fuel: entity.has_fuel,
            amenities: entity.amenities,
            built_date: entity.built_date,
            last_maintenance_date: entity.last_maintenance_date,
            next_maintenance_date: entity.next_maintenance_date,
            maintenance_interval: entity.maintenance_interval,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DockDto {
        DockDto {
            id: self.id,
            dock_number: self.dock_number,
            name: self.name,
            size: self.size.into(),
            status: self.status.into(),
            location: self.location,
            description: self.description,
            max_boat_length: self.max_boat_length,
            depth: self.depth,
            power_amperage: self.power_amperage,
            has_water: self.has_water,
            has_sewage: self.has_sewage,
            has_fuel: self.has_fuel,
            amenities: self.amenities,
            built_date: self.built_date,
            last_maintenance_date: self.last_maintenance_date,
            next_maintenance_date: self.next_maintenance_date,
            maintenance_interval: self.maintenance_interval,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn merge(self, params: UpdateDockParams) -> Self {
        Self {
            dock_number: params.dock_number.unwrap_or(self.dock_number),
            name: params.name.unwrap_or(self.name),
            size: params.size.unwrap_or(self.size),
            status: params.status.unwrap_or(self.status),
            location: params.location.or(self.location),
            description: params.description.or(self.description),
            max_boat_length: params.max_boat_length.or(self.max_boat_length),
            depth: params.depth.or(self.depth),
            power_amperage: params.power_amperage.or(self.power_amperage),
            has_water: params.has_water.unwrap_or(self.has_water),
            has_sewage: params.has_sewage.unwrap_or(self.has_sewage),
            has_fuel: params.has_fuel.unwrap_or(self.has_fuel),
            amenities: params.amenities.or(self.amenities),
            built_date: params.built_date.or(self.built_date),
            last_maintenance_date: params.last_maintenance_date.or(self.last_maintenance_date),
            next_maintenance_date: params.next_maintenance_date.or(self.next_maintenance_date),
            maintenance_interval: params.maintenance_interval.or(self.maintenance_interval),
            notes: params.notes.or(self.notes),
            ..self
        }
    }
}

/// Query filters for listing docks. `available` takes precedence over `status`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockFilter {
    pub available: bool,
    pub status: Option<DockStatus>,
    pub size: Option<DockSize>,
}

impl DockFilter {
    /// Status the listing is restricted to, if any.
    pub fn effective_status(&self) -> Option<DockStatus> {
        if self.available {
            Some(DockStatus::Available)
        } else {
            self.status
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DockStats {
    pub total: u64,
    pub by_status: Vec<(DockStatus, u64)>,
    pub by_size: Vec<(DockSize, u64)>,
}

impl DockStats {
    pub fn into_dto(self) -> DockStatsDto {
        DockStatsDto {
            total: self.total,
            by_status: self
                .by_status
                .into_iter()
                .map(|(status, count)| DockStatusCountDto {
                    status: status.into(),
                    count,
                })
                .collect(),
            by_size: self
                .by_size
                .into_iter()
                .map(|(size, count)| DockSizeCountDto {
                    size: size.into(),
                    count,
                })
                .collect(),
        }
    }
}

fn validate_measurements(
    max_boat_length: Option<f64>,
    depth: Option<f64>,
    power_amperage: Option<i32>,
) -> Result<(), AppError> {
    require_non_negative("maxBoatLength", max_boat_length)?;
    require_non_negative("depth", depth)?;
    require_non_negative("powerAmperage", power_amperage.map(f64::from))
}

#[derive(Debug, Clone)]
pub struct CreateDockParams {
    pub dock_number: String,
    pub name: String,
    pub size: DockSize,
    pub status: DockStatus,
    pub location: Option<String>,
    pub description: Option<String>,
    pub max_boat_length: Option<f64>,
    pub depth: Option<f64>,
    pub power_amperage: Option<i32>,
    pub has_water: bool,
    pub has_sewage: bool,
    pub has_fuel: bool,
    pub amenities: Option<Value>,
    pub built_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: Option<i32>,
    pub notes: Option<String>,
}

impl CreateDockParams {
    /// Validates the request body. Defaults: AVAILABLE, water on, sewage and fuel off.
    pub fn from_dto(dto: CreateDockDto) -> Result<Self, AppError> {
        require_non_empty("dockNumber", &dto.dock_number)?;
        require_non_empty("name", &dto.name)?;
        validate_measurements(dto.max_boat_length, dto.depth, dto.power_amperage)?;

        Ok(Self {
            dock_number: dto.dock_number.trim().to_string(),
            name: dto.name.trim().to_string(),
            size: dto.size.into(),
            status: dto.status.map(Into::into).unwrap_or(DockStatus::Available),
            location: dto.location,
            description: dto.description,
            max_boat_length: dto.max_boat_length,
            depth: dto.depth,
            power_amperage: dto.power_amperage,
            has_water: dto.has_water.unwrap_or(true),
            has_sewage: dto.has_sewage.unwrap_or(false),
            has_fuel: dto.has_fuel.unwrap_or(false),
            amenities: dto.amenities,
            built_date: dto.built_date,
            last_maintenance_date: dto.last_maintenance_date,
            next_maintenance_date: dto.next_maintenance_date,
            maintenance_interval: dto.maintenance_interval,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDockParams {
    pub dock_number: Option<String>,
    pub name: Option<String>,
    pub size: Option<DockSize>,
    pub status: Option<DockStatus>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub max_boat_length: Option<f64>,
    pub depth: Option<f64>,
    pub power_amperage: Option<i32>,
    pub has_water: Option<bool>,
    pub has_sewage: Option<bool>,
    pub has_fuel: Option<bool>,
    pub amenities: Option<Value>,
    pub built_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: Option<i32>,
    pub notes: Option<String>,
}

impl UpdateDockParams {
    pub fn from_dto(dto: UpdateDockDto) -> Result<Self, AppError> {
        if let Some(dock_number) = &dto.dock_number {
            require_non_empty("dockNumber", dock_number)?;
        }
        if let Some(name) = &dto.name {
            require_non_empty("name", name)?;
        }
        validate_measurements(dto.max_boat_length, dto.depth, dto.power_amperage)?;

        Ok(Self {
            dock_number: dto.dock_number.map(|v| v.trim().to_string()),
            name: dto.name.map(|v| v.trim().to_string()),
            size: dto.size.map(Into::into),
            status: dto.status.map(Into::into),
            location: dto.location,
            description: dto.description,
            max_boat_length: dto.max_boat_length,
            depth: dto.depth,
            power_amperage: dto.power_amperage,
            has_water: dto.has_water,
            has_sewage: dto.has_sewage,
            has_fuel: dto.has_fuel,
            amenities: dto.amenities,
            built_date: dto.built_date,
            last_maintenance_date: dto.last_maintenance_date,
            next_maintenance_date: dto.next_maintenance_date,
            maintenance_interval: dto.maintenance_interval,
            notes: dto.notes,
        })
    }
}
