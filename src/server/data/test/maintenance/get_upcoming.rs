use super::*;

/// Tests that only future SCHEDULED work is upcoming.
///
/// Expected: soonest first; past or non-scheduled records excluded
#[tokio::test]
async fn returns_future_scheduled_soonest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    let now = Utc::now();

    let later = factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now + Duration::days(20))
        .build()
        .await?;
    let sooner = factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now + Duration::days(2))
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now + Duration::days(5))
        .status(MaintenanceStatus::InProgress)
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .asset_id(asset.id)
        .scheduled_date(now - Duration::days(1))
        .build()
        .await?;

    let upcoming = MaintenanceRepository::new(db).get_upcoming(now).await?;

    let ids: Vec<i32> = upcoming.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}
