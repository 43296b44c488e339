use super::*;

/// Tests customer and status filters.
///
/// Expected: newest first, filters combined with AND
#[tokio::test]
async fn filters_by_customer_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_customer(db).await?;
    let second = factory::create_customer(db).await?;

    let old = factory::service_request::ServiceRequestFactory::new(db, first.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let done = factory::service_request::ServiceRequestFactory::new(db, first.id)
        .status(ServiceRequestStatus::Completed)
        .build()
        .await?;
    factory::create_service_request(db, second.id).await?;

    let repo = ServiceRequestRepository::new(db);

    let mine = repo.get_all(Some(first.id), None).await?;
    let ids: Vec<i32> = mine.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![done.id, old.id]);

    let pending = repo
        .get_all(Some(first.id), Some(ServiceRequestStatus::Pending))
        .await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, old.id);

    let all_pending = repo
        .get_all(None, Some(ServiceRequestStatus::Pending))
        .await?;
    assert_eq!(all_pending.len(), 2);

    Ok(())
}
