//! Asset domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{AssetStatus, AssetType};
use serde_json::Value;

use crate::{
    model::asset::{
        AssetDto, AssetStatsDto, AssetStatusCountDto, AssetTypeCountDto, CreateAssetDto,
        UpdateAssetDto,
    },
    server::{
        error::AppError,
        util::validate::{require_non_empty, require_non_negative},
    },
};

/// Marina infrastructure or equipment tracked for maintenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: i32,
    pub name: String,
    pub asset_type: AssetType,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expiration: Option<NaiveDate>,
    pub expected_lifespan_years: Option<i32>,
    pub specifications: Option<Value>,
    pub maintenance_interval: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    pub fn from_entity(entity: entity::asset::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            asset_type: entity.asset_type,
            identifier: entity.identifier,
            description: entity.description,
            location: entity.location,
            status: entity.status,
            purchase_date: entity.purchase_date,
            purchase_price: entity.purchase_price,
            warranty_expiration: entity.warranty_expiration,
            expected_lifespan_years: entity.expected_lifespan_years,
            specifications: entity.specifications,
            maintenance_interval: entity.maintenance_interval,
            last_maintenance_date: entity.last_maintenance_date,
            next_maintenance_date: entity.next_maintenance_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AssetDto {
        AssetDto {
            id: self.id,
            name: self.name,
            asset_type: self.asset_type.into(),
            identifier: self.identifier,
            description: self.description,
            location: self.location,
            status: self.status.into(),
            purchase_date: self.purchase_date,
            purchase_price: self.purchase_price,
            warranty_expiration: self.warranty_expiration,
            expected_lifespan_years: self.expected_lifespan_years,
            specifications: self.specifications,
            maintenance_interval: self.maintenance_interval,
            last_maintenance_date: self.last_maintenance_date,
            next_maintenance_date: self.next_maintenance_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn merge(self, params: UpdateAssetParams) -> Self {
        Self {
            name: params.name.unwrap_or(self.name),
            asset_type: params.asset_type.unwrap_or(self.asset_type),
            identifier: params.identifier.or(self.identifier),
            description: params.description.or(self.description),
            location: params.location.or(self.location),
            status: params.status.unwrap_or(self.status),
            purchase_date: params.purchase_date.or(self.purchase_date),
            purchase_price: params.purchase_price.or(self.purchase_price),
            warranty_expiration: params.warranty_expiration.or(self.warranty_expiration),
            expected_lifespan_years: params
                .expected_lifespan_years
                .or(self.expected_lifespan_years),
            specifications: params.specifications.or(self.specifications),
            maintenance_interval: params.maintenance_interval.or(self.maintenance_interval),
            last_maintenance_date: params.last_maintenance_date.or(self.last_maintenance_date),
            next_maintenance_date: params.next_maintenance_date.or(self.next_maintenance_date),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AssetFilter {
    pub asset_type: Option<AssetType>,
    pub status: Option<AssetStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetStats {
    pub total: u64,
    pub by_type: Vec<(AssetType, u64)>,
    pub by_status: Vec<(AssetStatus, u64)>,
}

impl AssetStats {
    pub fn into_dto(self) -> AssetStatsDto {
        AssetStatsDto {
            total: self.total,
            by_type: self
                .by_type
                .into_iter()
                .map(|(asset_type, count)| AssetTypeCountDto {
                    asset_type: asset_type.into(),
                    count,
                })
                .collect(),
            by_status: self
                .by_status
                .into_iter()
                .map(|(status, count)| AssetStatusCountDto {
                    status: status.into(),
                    count,
                })
                .collect(),
        }
    }
}

fn validate_numbers(
    purchase_price: Option<f64>,
    expected_lifespan_years: Option<i32>,
    maintenance_interval: Option<i32>,
) -> Result<(), AppError> {
    require_non_negative("purchasePrice", purchase_price)?;
    require_non_negative(
        "expectedLifespanYears",
        expected_lifespan_years.map(f64::from),
    )?;
    require_non_negative("maintenanceInterval", maintenance_interval.map(f64::from))
}

#[derive(Debug, Clone)]
pub struct CreateAssetParams {
    pub name: String,
    pub asset_type: AssetType,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expiration: Option<NaiveDate>,
    pub expected_lifespan_years: Option<i32>,
    pub specifications: Option<Value>,
    pub maintenance_interval: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
}

impl CreateAssetParams {
    /// Validates the request body; status defaults to OPERATIONAL.
    pub fn from_dto(dto: CreateAssetDto) -> Result<Self, AppError> {
        require_non_empty("name", &dto.name)?;
        validate_numbers(
            dto.purchase_price,
            dto.expected_lifespan_years,
            dto.maintenance_interval,
        )?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            asset_type: dto.asset_type.into(),
            identifier: dto.identifier,
            description: dto.description,
            location: dto.location,
            status: dto
                .status
                .map(Into::into)
                .unwrap_or(AssetStatus::Operational),
            purchase_date: dto.purchase_date,
            purchase_price: dto.purchase_price,
            warranty_expiration: dto.warranty_expiration,
            expected_lifespan_years: dto.expected_lifespan_years,
            specifications: dto.specifications,
            maintenance_interval: dto.maintenance_interval,
            last_maintenance_date: dto.last_maintenance_date,
            next_maintenance_date: dto.next_maintenance_date,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAssetParams {
    pub name: Option<String>,
    pub asset_type: Option<AssetType>,
    pub identifier: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<f64>,
    pub warranty_expiration: Option<NaiveDate>,
    pub expected_lifespan_years: Option<i32>,
    pub specifications: Option<Value>,
    pub maintenance_interval: Option<i32>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
}

impl UpdateAssetParams {
    pub fn from_dto(dto: UpdateAssetDto) -> Result<Self, AppError> {
        if let Some(name) = &dto.name {
            require_non_empty("name", name)?;
        }
        validate_numbers(
            dto.purchase_price,
            dto.expected_lifespan_years,
            dto.maintenance_interval,
        )?;

        Ok(Self {
            name: dto.name.map(|v| v.trim().to_string()),
            asset_type: dto.asset_type.map(Into::into),
            identifier: dto.identifier,
            description: dto.description,
            location: dto.location,
            status: dto.status.map(Into::into),
            purchase_date: dto.purchase_date,
            purchase_price: dto.purchase_price,
            warranty_expiration: dto.warranty_expiration,
            expected_lifespan_years: dto.expected_lifespan_years,
            specifications: dto.specifications,
            maintenance_interval: dto.maintenance_interval,
            last_maintenance_date: dto.last_maintenance_date,
            next_maintenance_date: dto.next_maintenance_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::{AssetStatusDto, AssetTypeDto};

    #[test]
    fn create_defaults_to_operational() {
        let dto = CreateAssetDto {
            name: "Fuel pump 1".to_string(),
            asset_type: AssetTypeDto::FuelStation,
            identifier: None,
            description: None,
            location: None,
            status: None,
            purchase_date: None,
            purchase_price: Some(12_000.0),
            warranty_expiration: None,
            expected_lifespan_years: Some(15),
            specifications: None,
            maintenance_interval: None,
            last_maintenance_date: None,
            next_maintenance_date: None,
        };

        let params = CreateAssetParams::from_dto(dto.clone()).unwrap();
        assert_eq!(params.status, AssetStatus::Operational);
        assert_eq!(params.asset_type, AssetType::FuelStation);

        let negative = CreateAssetDto {
            purchase_price: Some(-1.0),
            ..dto
        };
        assert!(CreateAssetParams::from_dto(negative).is_err());
    }

    #[test]
    fn update_status_maps_from_dto() {
        let params = UpdateAssetParams::from_dto(UpdateAssetDto {
            status: Some(AssetStatusDto::UnderMaintenance),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.status, Some(AssetStatus::UnderMaintenance));
        assert!(params.name.is_none());
    }
}
