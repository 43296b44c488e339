use super::*;

/// Tests completing a request through merge and update.
///
/// Expected: status, completion date and actual cost stored
#[tokio::test]
async fn stores_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let entity = factory::create_service_request(db, customer.id).await?;
    let now = Utc::now();

    let repo = ServiceRequestRepository::new(db);
    let merged = ServiceRequest::from_entity(entity).merge(
        UpdateServiceRequestParams {
            status: Some(ServiceRequestStatus::Completed),
            actual_cost: Some(210.0),
            ..Default::default()
        },
        now,
    );
    let updated = repo.update(merged).await?;

    assert_eq!(updated.status, ServiceRequestStatus::Completed);
    assert_eq!(updated.completed_date, Some(now));
    assert_eq!(updated.actual_cost, Some(210.0));

    assert!(repo.delete(updated.id).await?);
    assert!(repo.find_by_id(updated.id).await?.is_none());

    Ok(())
}
