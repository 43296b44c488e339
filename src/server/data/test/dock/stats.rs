use super::*;

/// Tests grouped dock counts.
///
/// Expected: total plus one entry per status and size present
#[tokio::test]
async fn counts_by_status_and_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_dock_with_status(db, "A1", DockStatus::Available).await?;
    factory::create_dock_with_status(db, "A2", DockStatus::Available).await?;
    factory::dock::DockFactory::new(db)
        .dock_number("M1")
        .status(DockStatus::Maintenance)
        .size(DockSize::ExtraLarge)
        .build()
        .await?;

    let stats = DockRepository::new(db).stats().await?;

    assert_eq!(stats.total, 3);
    assert!(stats.by_status.contains(&(DockStatus::Available, 2)));
    assert!(stats.by_status.contains(&(DockStatus::Maintenance, 1)));
    assert_eq!(stats.by_status.len(), 2);
    assert!(stats.by_size.contains(&(DockSize::Medium, 2)));
    assert!(stats.by_size.contains(&(DockSize::ExtraLarge, 1)));

    Ok(())
}

/// Tests stats on an empty table.
///
/// Expected: zero total and no groups
#[tokio::test]
async fn empty_table_has_no_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = DockRepository::new(db).stats().await?;

    assert_eq!(stats.total, 0);
    assert!(stats.by_status.is_empty());
    assert!(stats.by_size.is_empty());

    Ok(())
}
