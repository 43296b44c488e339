use super::*;

/// Tests that visits to unknown docks are dropped and duplicates collapse.
///
/// Expected: each known dock with an active visit listed once
#[tokio::test]
async fn returns_distinct_known_docks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_dock_with_status(db, "A1", DockStatus::Available).await?;
    factory::create_dock_with_status(db, "A2", DockStatus::Occupied).await?;
    let customer = factory::create_customer(db).await?;
    factory::create_active_visit(db, customer.id, "A1").await?;
    factory::create_active_visit(db, customer.id, "A1").await?;
    factory::create_active_visit(db, customer.id, "Z9").await?;
    factory::visit::VisitFactory::new(db, customer.id)
        .dock_number("A2")
        .checked_out()
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);
    let docks = repo.dock_statuses().await?;
    assert_eq!(docks.len(), 2);

    let numbers = docks.into_iter().map(|(number, _)| number).collect();
    let visited = repo.active_visit_docks(numbers).await?;

    assert_eq!(visited, vec!["A1".to_string()]);
    assert!(repo.active_visit_docks(Vec::new()).await?.is_empty());

    Ok(())
}
