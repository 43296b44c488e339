use super::*;

/// Tests creating a customer.
///
/// Expected: Ok(Customer) with generated id and matching timestamps
#[tokio::test]
async fn creates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.create(params("grace@example.com")).await?;

    assert!(customer.id > 0);
    assert_eq!(customer.email, "grace@example.com");
    assert_eq!(customer.membership_tier, MembershipTier::Basic);
    assert_eq!(customer.created_at, customer.updated_at);

    let found = repo.find_by_email("grace@example.com").await?;
    assert_eq!(found.map(|c| c.id), Some(customer.id));

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    repo.create(params("dup@example.com")).await?;

    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
