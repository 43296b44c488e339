use super::*;

/// Tests type and status filters.
///
/// Expected: assets sorted by name, filters combined with AND
#[tokio::test]
async fn filters_by_type_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::asset::AssetFactory::new(db)
        .name("Pump B")
        .asset_type(AssetType::FuelStation)
        .build()
        .await?;
    factory::asset::AssetFactory::new(db)
        .name("Pump A")
        .asset_type(AssetType::FuelStation)
        .status(AssetStatus::OutOfService)
        .build()
        .await?;
    factory::asset::AssetFactory::new(db)
        .name("Crane")
        .build()
        .await?;

    let repo = AssetRepository::new(db);

    let pumps = repo
        .get_all(AssetFilter {
            asset_type: Some(AssetType::FuelStation),
            status: None,
        })
        .await?;
    let names: Vec<&str> = pumps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Pump A", "Pump B"]);

    let broken = repo
        .get_all(AssetFilter {
            asset_type: Some(AssetType::FuelStation),
            status: Some(AssetStatus::OutOfService),
        })
        .await?;
    assert_eq!(broken.len(), 1);
    assert_eq!(broken[0].name, "Pump A");

    assert_eq!(repo.get_all(AssetFilter::default()).await?.len(), 3);

    Ok(())
}
