use super::*;

/// Tests point-in-time counts against a window start.
///
/// Expected: `as_of` keeps only rows that existed by then and are still open,
/// so a visit checked out after the window start is not counted
#[tokio::test]
async fn as_of_restricts_to_earlier_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let window_start = now - Duration::days(30);
    let customer = factory::create_customer(db).await?;

    factory::visit::VisitFactory::new(db, customer.id)
        .check_in_time(now - Duration::days(40))
        .build()
        .await?;
    factory::create_active_visit(db, customer.id, "A2").await?;
    factory::visit::VisitFactory::new(db, customer.id)
        .check_in_time(now - Duration::days(40))
        .check_out_time(now - Duration::days(10))
        .build()
        .await?;
    factory::create_visit(db, customer.id).await?;

    factory::service_request::ServiceRequestFactory::new(db, customer.id)
        .created_at(now - Duration::days(45))
        .build()
        .await?;
    factory::create_service_request(db, customer.id).await?;
    factory::service_request::ServiceRequestFactory::new(db, customer.id)
        .status(ServiceRequestStatus::InProgress)
        .build()
        .await?;

    factory::feedback::FeedbackFactory::new(db, customer.id)
        .created_at(now - Duration::days(31))
        .build()
        .await?;
    factory::feedback::FeedbackFactory::new(db, customer.id)
        .reviewed(true)
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.count_active_visits(None).await?, 2);
    assert_eq!(repo.count_active_visits(Some(window_start)).await?, 1);
    assert_eq!(repo.count_pending_requests(None).await?, 2);
    assert_eq!(repo.count_pending_requests(Some(window_start)).await?, 1);
    assert_eq!(repo.count_unreviewed_feedback(None).await?, 1);
    assert_eq!(repo.count_unreviewed_feedback(Some(window_start)).await?, 1);

    Ok(())
}

/// Tests customer growth cohorts.
///
/// Expected: half-open `[start, end)` window when an end is given
#[tokio::test]
async fn counts_customers_created_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let window_start = now - Duration::days(30);
    let prior_start = window_start - Duration::days(30);

    for days_ago in [1, 10, 35, 59, 90] {
        factory::customer::CustomerFactory::new(db)
            .created_at(now - Duration::days(days_ago))
            .build()
            .await?;
    }

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.count_customers().await?, 5);
    assert_eq!(repo.count_customers_created(window_start, None).await?, 2);
    assert_eq!(
        repo.count_customers_created(prior_start, Some(window_start))
            .await?,
        2
    );

    Ok(())
}
