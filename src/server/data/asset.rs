//! Asset data repository for database operations.

use chrono::Utc;
use entity::sea_orm_active_enums::{AssetStatus, AssetType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::asset::{Asset, AssetFilter, AssetStats, CreateAssetParams};

pub struct AssetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAssetParams) -> Result<Asset, DbErr> {
        let now = Utc::now();
        let entity = entity::asset::ActiveModel {
            name: ActiveValue::Set(params.name),
            asset_type: ActiveValue::Set(params.asset_type),
            identifier: ActiveValue::Set(params.identifier),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            status: ActiveValue::Set(params.status),
            purchase_date: ActiveValue::Set(params.purchase_date),
            purchase_price: ActiveValue::Set(params.purchase_price),
            warranty_expiration: ActiveValue::Set(params.warranty_expiration),
            expected_lifespan_years: ActiveValue::Set(params.expected_lifespan_years),
            specifications: ActiveValue::Set(params.specifications),
            maintenance_interval: ActiveValue::Set(params.maintenance_interval),
            last_maintenance_date: ActiveValue::Set(params.last_maintenance_date),
            next_maintenance_date: ActiveValue::Set(params.next_maintenance_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Asset::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Asset>, DbErr> {
        let entity = entity::prelude::Asset::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Asset::from_entity))
    }

    /// Lists assets by name.
    pub async fn get_all(&self, filter: AssetFilter) -> Result<Vec<Asset>, DbErr> {
        let mut query = entity::prelude::Asset::find();
        if let Some(asset_type) = filter.asset_type {
            query = query.filter(entity::asset::Column::AssetType.eq(asset_type));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::asset::Column::Status.eq(status));
        }

        let entities = query
            .order_by_asc(entity::asset::Column::Name)
            .order_by_asc(entity::asset::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Asset::from_entity).collect())
    }

    pub async fn update(&self, asset: Asset) -> Result<Asset, DbErr> {
        let entity = entity::asset::ActiveModel {
            id: ActiveValue::Unchanged(asset.id),
            name: ActiveValue::Set(asset.name),
            asset_type: ActiveValue::Set(asset.asset_type),
            identifier: ActiveValue::Set(asset.identifier),
            description: ActiveValue::Set(asset.description),
            location: ActiveValue::Set(asset.location),
            status: ActiveValue::Set(asset.status),
            purchase_date: ActiveValue::Set(asset.purchase_date),
            purchase_price: ActiveValue::Set(asset.purchase_price),
            warranty_expiration: ActiveValue::Set(asset.warranty_expiration),
            expected_lifespan_years: ActiveValue::Set(asset.expected_lifespan_years),
            specifications: ActiveValue::Set(asset.specifications),
            maintenance_interval: ActiveValue::Set(asset.maintenance_interval),
            last_maintenance_date: ActiveValue::Set(asset.last_maintenance_date),
            next_maintenance_date: ActiveValue::Set(asset.next_maintenance_date),
            created_at: ActiveValue::Unchanged(asset.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(Asset::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Asset::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts assets in total and grouped by type and by status.
    pub async fn stats(&self) -> Result<AssetStats, DbErr> {
        let total = entity::prelude::Asset::find().count(self.db).await?;

        let by_type = entity::prelude::Asset::find()
            .select_only()
            .column(entity::asset::Column::AssetType)
            .column_as(entity::asset::Column::Id.count(), "count")
            .group_by(entity::asset::Column::AssetType)
            .order_by_asc(entity::asset::Column::AssetType)
            .into_tuple::<(AssetType, i64)>()
            .all(self.db)
            .await?;

        let by_status = entity::prelude::Asset::find()
            .select_only()
            .column(entity::asset::Column::Status)
            .column_as(entity::asset::Column::Id.count(), "count")
            .group_by(entity::asset::Column::Status)
            .order_by_asc(entity::asset::Column::Status)
            .into_tuple::<(AssetStatus, i64)>()
            .all(self.db)
            .await?;

        Ok(AssetStats {
            total,
            by_type: by_type
                .into_iter()
                .map(|(asset_type, count)| (asset_type, count as u64))
                .collect(),
            by_status: by_status
                .into_iter()
                .map(|(status, count)| (status, count as u64))
                .collect(),
        })
    }
}
