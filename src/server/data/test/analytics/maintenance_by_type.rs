use super::*;

/// Tests the completion window and null costs.
///
/// Expected: only records completed since `start`; an all-null cost group sums to 0
#[tokio::test]
async fn groups_completed_since_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    let now = Utc::now();
    let start = now - Duration::days(90);

    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .completed_at(now - Duration::days(10))
        .actual_cost(200.0)
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .maintenance_type(MaintenanceType::Corrective)
        .completed_at(now - Duration::days(20))
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .completed_at(now - Duration::days(200))
        .actual_cost(999.0)
        .build()
        .await?;
    factory::create_maintenance_record(db, asset.id).await?;

    let repo = AnalyticsRepository::new(db);
    let by_type = repo.maintenance_by_type(start).await?;

    assert_eq!(by_type.len(), 2);
    let routine = by_type
        .iter()
        .find(|m| m.maintenance_type == MaintenanceType::Routine)
        .unwrap();
    assert_eq!(routine.count, 1);
    assert_eq!(routine.total_cost, 200.0);
    let corrective = by_type
        .iter()
        .find(|m| m.maintenance_type == MaintenanceType::Corrective)
        .unwrap();
    assert_eq!(corrective.total_cost, 0.0);

    let costs = repo.completed_maintenance_costs(start).await?;
    assert_eq!(costs.len(), 1);
    assert_eq!(costs[0].1, 200.0);

    Ok(())
}
