use super::*;

/// Tests the prediction window, which includes every status.
///
/// Expected: records dated inside the window only
#[tokio::test]
async fn includes_any_status_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    let now = Utc::now();

    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now + Duration::days(10))
        .estimated_cost(100.0)
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now + Duration::days(40))
        .status(MaintenanceStatus::Cancelled)
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now + Duration::days(400))
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now - Duration::days(1))
        .build()
        .await?;

    let records = MaintenanceRepository::new(db)
        .get_scheduled_between(now, now + Duration::days(180))
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].estimated_cost, Some(100.0));
    assert_eq!(records[1].status, MaintenanceStatus::Cancelled);

    Ok(())
}
