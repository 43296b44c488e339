//! Asset factory for creating test asset entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{AssetStatus, AssetType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test assets with customizable fields.
pub struct AssetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    asset_type: AssetType,
    status: AssetStatus,
}

impl<'a> AssetFactory<'a> {
    /// Creates a new AssetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Asset {id}"`
    /// - asset_type: `Equipment`
    /// - status: `Operational`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Asset {}", next_id()),
            asset_type: AssetType::Equipment,
            status: AssetStatus::Operational,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = asset_type;
        self
    }

    pub fn status(mut self, status: AssetStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the asset entity into the database.
    pub async fn build(self) -> Result<entity::asset::Model, DbErr> {
        let now = Utc::now();
        entity::asset::ActiveModel {
            name: ActiveValue::Set(self.name),
            asset_type: ActiveValue::Set(self.asset_type),
            identifier: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            purchase_date: ActiveValue::Set(None),
            purchase_price: ActiveValue::Set(None),
            warranty_expiration: ActiveValue::Set(None),
            expected_lifespan_years: ActiveValue::Set(None),
            specifications: ActiveValue::Set(None),
            maintenance_interval: ActiveValue::Set(None),
            last_maintenance_date: ActiveValue::Set(None),
            next_maintenance_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an operational equipment asset with default values.
pub async fn create_asset(db: &DatabaseConnection) -> Result<entity::asset::Model, DbErr> {
    AssetFactory::new(db).build().await
}
