use super::*;

/// Tests ordering and filtering of the dock list.
///
/// Expected: docks sorted by number; `available` wins over an explicit status
#[tokio::test]
async fn filters_and_orders_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_dock_with_status(db, "B2", DockStatus::Occupied).await?;
    factory::create_dock_with_status(db, "A1", DockStatus::Available).await?;
    factory::dock::DockFactory::new(db)
        .dock_number("C3")
        .size(DockSize::Small)
        .build()
        .await?;

    let repo = DockRepository::new(db);

    let all = repo.get_all(DockFilter::default()).await?;
    let numbers: Vec<&str> = all.iter().map(|d| d.dock_number.as_str()).collect();
    assert_eq!(numbers, vec!["A1", "B2", "C3"]);

    let available = repo
        .get_all(DockFilter {
            available: true,
            status: Some(DockStatus::Occupied),
            size: None,
        })
        .await?;
    assert_eq!(available.len(), 2);
    assert!(available.iter().all(|d| d.status == DockStatus::Available));

    let small = repo
        .get_all(DockFilter {
            size: Some(DockSize::Small),
            ..Default::default()
        })
        .await?;
    assert_eq!(small.len(), 1);
    assert_eq!(small[0].dock_number, "C3");

    Ok(())
}
