use super::*;

/// Tests deleting a customer twice.
///
/// Expected: true for the first delete, false once the row is gone
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let repo = CustomerRepository::new(db);

    assert!(repo.delete(customer.id).await?);
    assert!(!repo.delete(customer.id).await?);
    assert!(repo.find_by_id(customer.id).await?.is_none());

    Ok(())
}
