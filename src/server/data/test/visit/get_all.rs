use super::*;

/// Tests filtering visits by customer.
///
/// Expected: only the requested customer's visits, latest check-in first
#[tokio::test]
async fn filters_by_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_customer(db).await?;
    let second = factory::create_customer(db).await?;

    let early = factory::visit::VisitFactory::new(db, first.id)
        .check_in_time(Utc::now() - Duration::days(5))
        .checked_out()
        .build()
        .await?;
    let late = factory::visit::VisitFactory::new(db, first.id)
        .check_in_time(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::create_visit(db, second.id).await?;

    let repo = VisitRepository::new(db);

    let visits = repo.get_all(Some(first.id)).await?;
    let ids: Vec<i32> = visits.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}
