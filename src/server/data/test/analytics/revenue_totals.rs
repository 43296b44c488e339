use super::*;

/// Tests inclusive check-in bounds.
///
/// Expected: count and sum over visits inside the range only
#[tokio::test]
async fn sums_charges_inside_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let now = Utc::now();

    for (days_ago, charges) in [(1, 100.0), (5, 50.5), (20, 999.0)] {
        factory::visit::VisitFactory::new(db, customer.id)
            .check_in_time(now - Duration::days(days_ago))
            .service_charges(charges)
            .checked_out()
            .build()
            .await?;
    }

    let repo = AnalyticsRepository::new(db);

    let (count, sum) = repo
        .revenue_totals(RevenueRange {
            start: Some(now - Duration::days(10)),
            end: Some(now),
        })
        .await?;
    assert_eq!(count, 2);
    assert_eq!(sum, Some(150.5));

    let (count, sum) = repo.revenue_totals(RevenueRange::default()).await?;
    assert_eq!(count, 3);
    assert_eq!(sum, Some(1149.5));

    Ok(())
}

/// Tests visits sitting exactly on the range bounds and one-sided ranges.
///
/// Expected: both bounds are inclusive and an omitted bound is unbounded
#[tokio::test]
async fn bounds_are_inclusive_and_optional() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();

    for (check_in, charges) in [
        (start - Duration::days(1), 1.0),
        (start, 10.0),
        (start + Duration::days(10), 20.0),
        (end, 40.0),
        (end + Duration::days(1), 80.0),
    ] {
        factory::visit::VisitFactory::new(db, customer.id)
            .check_in_time(check_in)
            .service_charges(charges)
            .checked_out()
            .build()
            .await?;
    }

    let repo = AnalyticsRepository::new(db);

    let (count, sum) = repo
        .revenue_totals(RevenueRange {
            start: Some(start),
            end: Some(end),
        })
        .await?;
    assert_eq!(count, 3);
    assert_eq!(sum, Some(70.0));

    let (count, sum) = repo
        .revenue_totals(RevenueRange {
            start: Some(start),
            end: None,
        })
        .await?;
    assert_eq!(count, 4);
    assert_eq!(sum, Some(150.0));

    let (count, sum) = repo
        .revenue_totals(RevenueRange {
            start: None,
            end: Some(end),
        })
        .await?;
    assert_eq!(count, 4);
    assert_eq!(sum, Some(71.0));

    Ok(())
}

/// Tests a range with no visits.
///
/// Expected: zero count and no sum
#[tokio::test]
async fn empty_range_has_no_sum() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (count, sum) = AnalyticsRepository::new(db)
        .revenue_totals(RevenueRange::default())
        .await?;

    assert_eq!(count, 0);
    assert_eq!(sum, None);

    Ok(())
}
