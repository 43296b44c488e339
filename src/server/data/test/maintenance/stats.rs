use super::*;

/// Tests maintenance statistics.
///
/// Expected: upcoming counts every SCHEDULED record; cost sums recorded actuals
#[tokio::test]
async fn summarizes_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    let now = Utc::now();

    factory::create_maintenance_record(db, asset.id).await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now - Duration::days(2))
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .maintenance_type(MaintenanceType::Emergency)
        .completed_at(now - Duration::days(5))
        .actual_cost(320.0)
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .maintenance_type(MaintenanceType::Emergency)
        .completed_at(now - Duration::days(6))
        .actual_cost(80.5)
        .build()
        .await?;

    let stats = MaintenanceRepository::new(db).stats(now).await?;

    assert_eq!(stats.total, 4);
    assert_eq!(stats.upcoming, 2);
    assert_eq!(stats.overdue, 1);
    assert!(stats.by_type.contains(&(MaintenanceType::Routine, 2)));
    assert!(stats.by_type.contains(&(MaintenanceType::Emergency, 2)));
    assert_eq!(stats.total_cost, 400.5);

    Ok(())
}

/// Tests stats with no recorded costs.
///
/// Expected: zero total cost
#[tokio::test]
async fn missing_costs_sum_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = MaintenanceRepository::new(db).stats(Utc::now()).await?;

    assert_eq!(stats.total, 0);
    assert_eq!(stats.total_cost, 0.0);

    Ok(())
}
