use super::*;

/// Tests persisting a dock status change.
///
/// Expected: new status stored, other fields kept
#[tokio::test]
async fn stores_status_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_maintenance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_dock_with_status(db, "D9", DockStatus::Available).await?;
    let repo = DockRepository::new(db);

    let merged = Dock::from_entity(entity).merge(UpdateDockParams {
        status: Some(DockStatus::OutOfService),
        notes: Some("Storm damage".to_string()),
        ..Default::default()
    });
    let updated = repo.update(merged).await?;

    assert_eq!(updated.status, DockStatus::OutOfService);
    assert_eq!(updated.notes.as_deref(), Some("Storm damage"));
    assert_eq!(updated.dock_number, "D9");
    assert!(repo.delete(updated.id).await?);

    Ok(())
}
