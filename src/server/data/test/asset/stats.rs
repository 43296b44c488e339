use super::*;

/// Tests grouped asset counts.
///
/// Expected: total plus one entry per type and status present
#[tokio::test]
async fn counts_by_type_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_asset(db).await?;
    factory::create_asset(db).await?;
    factory::asset::AssetFactory::new(db)
        .asset_type(AssetType::Building)
        .status(AssetStatus::MaintenanceRequired)
        .build()
        .await?;

    let stats = AssetRepository::new(db).stats().await?;

    assert_eq!(stats.total, 3);
    assert!(stats.by_type.contains(&(AssetType::Equipment, 2)));
    assert!(stats.by_type.contains(&(AssetType::Building, 1)));
    assert!(stats.by_status.contains(&(AssetStatus::Operational, 2)));
    assert!(stats
        .by_status
        .contains(&(AssetStatus::MaintenanceRequired, 1)));

    Ok(())
}
