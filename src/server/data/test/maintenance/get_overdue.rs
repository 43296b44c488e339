use super::*;

/// Tests overdue detection.
///
/// Expected: SCHEDULED records dated before `now`, oldest first
#[tokio::test]
async fn returns_past_scheduled_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dock = factory::create_dock(db).await?;
    let now = Utc::now();

    let recent = factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .dock_id(dock.id)
        .scheduled_date(now - Duration::days(1))
        .build()
        .await?;
    let oldest = factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .dock_id(dock.id)
        .scheduled_date(now - Duration::days(10))
        .build()
        .await?;
    factory::maintenance_record::MaintenanceRecordFactory::new(db)
        .dock_id(dock.id)
        .scheduled_date(now - Duration::days(3))
        .completed_at(now - Duration::days(3))
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);
    let overdue = repo.get_overdue(now).await?;

    let ids: Vec<i32> = overdue.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![oldest.id, recent.id]);
    assert_eq!(repo.count_overdue(now).await?, 2);

    Ok(())
}
