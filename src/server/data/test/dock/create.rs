use super::*;

fn params(dock_number: &str) -> CreateDockParams {
    CreateDockParams {
        dock_number: dock_number.to_string(),
        name: "North pier".to_string(),
        size: DockSize::Large,
        status: DockStatus::Available,
        location: Some("North basin".to_string()),
        description: None,
        max_boat_length: Some(18.5),
        depth: Some(4.0),
        power_amperage: Some(50),
        has_water: true,
        has_sewage: false,
        has_fuel: true,
        amenities: None,
        built_date: None,
        last_maintenance_date: None,
        next_maintenance_date: None,
        maintenance_interval: Some(90),
        notes: None,
    }
}

/// Tests creating a dock and finding it by number.
///
/// Expected: Ok(Dock) retrievable by dock number
#[tokio::test]
async fn creates_dock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DockRepository::new(db);
    let dock = repo.create(params("N1")).await?;

    assert_eq!(dock.size, DockSize::Large);
    assert!(dock.has_fuel);
    assert_eq!(dock.power_amperage, Some(50));

    let found = repo.find_by_dock_number("N1").await?;
    assert_eq!(found.map(|d| d.id), Some(dock.id));
    assert!(repo.find_by_dock_number("N2").await?.is_none());

    Ok(())
}

/// Tests the unique constraint on dock number.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_dock_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DockRepository::new(db);
    repo.create(params("N1")).await?;

    assert!(repo.create(params("N1")).await.is_err());

    Ok(())
}
