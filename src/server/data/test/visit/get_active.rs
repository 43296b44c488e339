use super::*;

/// Tests that checked-out visits are excluded from the current list.
///
/// Expected: only visits with no checkout
#[tokio::test]
async fn returns_only_visits_without_checkout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    factory::create_visit(db, customer.id).await?;
    let active = factory::create_active_visit(db, customer.id, "B7").await?;

    let visits = VisitRepository::new(db).get_active().await?;

    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].id, active.id);
    assert_eq!(visits[0].dock_number, "B7");

    Ok(())
}
