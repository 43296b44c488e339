use super::*;

/// Tests the unreviewed filter.
///
/// Expected: reviewed feedback excluded
#[tokio::test]
async fn filters_unreviewed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let open = factory::create_feedback(db, customer.id).await?;
    factory::feedback::FeedbackFactory::new(db, customer.id)
        .reviewed(true)
        .build()
        .await?;

    let repo = FeedbackRepository::new(db);

    let unreviewed = repo
        .get_all(FeedbackFilter {
            customer_id: Some(customer.id),
            unreviewed: true,
        })
        .await?;
    assert_eq!(unreviewed.len(), 1);
    assert_eq!(unreviewed[0].id, open.id);

    assert_eq!(repo.get_all(FeedbackFilter::default()).await?.len(), 2);

    Ok(())
}
