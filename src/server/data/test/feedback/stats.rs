use super::*;

/// Tests rating averages when some feedback has no rating.
///
/// Expected: unrated feedback counted but left out of the averages
#[tokio::test]
async fn averages_ignore_missing_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    factory::feedback::FeedbackFactory::new(db, customer.id)
        .category(FeedbackCategory::Staff)
        .rating(Some(4))
        .build()
        .await?;
    factory::feedback::FeedbackFactory::new(db, customer.id)
        .category(FeedbackCategory::Staff)
        .rating(Some(2))
        .reviewed(true)
        .build()
        .await?;
    factory::feedback::FeedbackFactory::new(db, customer.id)
        .category(FeedbackCategory::Pricing)
        .rating(None)
        .build()
        .await?;

    let stats = FeedbackRepository::new(db).stats().await?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.unreviewed, 2);
    assert_eq!(stats.average_rating, 3.0);

    let staff = stats
        .category_stats
        .iter()
        .find(|s| s.category == FeedbackCategory::Staff)
        .unwrap();
    assert_eq!(staff.count, 2);
    assert_eq!(staff.avg_rating, 3.0);

    let pricing = stats
        .category_stats
        .iter()
        .find(|s| s.category == FeedbackCategory::Pricing)
        .unwrap();
    assert_eq!(pricing.count, 1);
    assert_eq!(pricing.avg_rating, 0.0);

    Ok(())
}

/// Tests stats with no feedback at all.
///
/// Expected: zeros and no categories
#[tokio::test]
async fn empty_stats_are_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = FeedbackRepository::new(db).stats().await?;

    assert_eq!(stats.total, 0);
    assert_eq!(stats.average_rating, 0.0);
    assert!(stats.category_stats.is_empty());

    Ok(())
}
