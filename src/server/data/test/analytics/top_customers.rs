use super::*;

/// Tests visit-count ranking with customers that never visited.
///
/// Expected: descending visit count, zero-visit customers included with zero spend
#[tokio::test]
async fn ranks_by_visit_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let idle = factory::create_customer(db).await?;
    let regular = factory::customer::CustomerFactory::new(db)
        .membership_tier(MembershipTier::Gold)
        .build()
        .await?;
    let (occasional, _) = factory::helpers::create_customer_with_visit(db, 40.0).await?;

    for charges in [10.0, 20.0, 30.0] {
        factory::visit::VisitFactory::new(db, regular.id)
            .service_charges(charges)
            .checked_out()
            .build()
            .await?;
    }

    let top = AnalyticsRepository::new(db).top_customers(10).await?;

    let ids: Vec<i32> = top.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![regular.id, occasional.id, idle.id]);

    assert_eq!(top[0].visit_count, 3);
    assert_eq!(top[0].total_spent, 60.0);
    assert_eq!(top[0].membership_tier, MembershipTier::Gold);
    assert_eq!(top[1].total_spent, 40.0);
    assert_eq!(top[2].visit_count, 0);
    assert_eq!(top[2].total_spent, 0.0);

    Ok(())
}

/// Tests the result limit.
///
/// Expected: no more than `limit` customers
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        factory::create_customer(db).await?;
    }

    let top = AnalyticsRepository::new(db).top_customers(10).await?;

    assert_eq!(top.len(), 10);

    Ok(())
}
