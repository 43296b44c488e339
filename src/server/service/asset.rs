use sea_orm::DatabaseConnection;

use crate::server::{
    data::asset::AssetRepository,
    error::AppError,
    model::asset::{Asset, AssetFilter, AssetStats, CreateAssetParams, UpdateAssetParams},
};

pub struct AssetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAssetParams) -> Result<Asset, AppError> {
        Ok(AssetRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, filter: AssetFilter) -> Result<Vec<Asset>, AppError> {
        Ok(AssetRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Asset, AppError> {
        AssetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, params: UpdateAssetParams) -> Result<Asset, AppError> {
        let repo = AssetRepository::new(self.db);
        let asset = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        Ok(repo.update(asset.merge(params)).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AssetRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn stats(&self) -> Result<AssetStats, AppError> {
        Ok(AssetRepository::new(self.db).stats().await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Asset {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::{
        prelude::Asset as AssetEntity,
        sea_orm_active_enums::{AssetStatus, AssetType},
    };
    use test_utils::{builder::TestBuilder, factory};

    /// Expected: status change is persisted and reflected in the filtered listing
    #[tokio::test]
    async fn update_moves_asset_between_status_filters() {
        let test = TestBuilder::new().with_table(AssetEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let asset = factory::asset::AssetFactory::new(db)
            .asset_type(AssetType::PowerStation)
            .build()
            .await
            .unwrap();
        let service = AssetService::new(db);

        service
            .update(
                asset.id,
                UpdateAssetParams {
                    status: Some(AssetStatus::UnderMaintenance),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let under_maintenance = service
            .get_all(AssetFilter {
                status: Some(AssetStatus::UnderMaintenance),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(under_maintenance.len(), 1);
        assert_eq!(under_maintenance[0].asset_type, AssetType::PowerStation);

        let operational = service
            .get_all(AssetFilter {
                status: Some(AssetStatus::Operational),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(operational.is_empty());
    }

    #[tokio::test]
    async fn missing_asset_is_not_found() {
        let test = TestBuilder::new().with_table(AssetEntity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AssetService::new(db);

        assert!(matches!(service.get_by_id(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update(1, UpdateAssetParams::default()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
