use super::*;

/// Tests persisting a merged customer.
///
/// Expected: changed fields stored, untouched fields kept, `updated_at` advanced
#[tokio::test]
async fn persists_merged_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.create(params("update@example.com")).await?;
    let created_at = customer.created_at;

    let merged = customer.merge(UpdateCustomerParams {
        last_name: Some("Brewster".to_string()),
        membership_tier: Some(MembershipTier::Gold),
        ..Default::default()
    });
    let updated = repo.update(merged).await?;

    assert_eq!(updated.last_name, "Brewster");
    assert_eq!(updated.membership_tier, MembershipTier::Gold);
    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.created_at, created_at);
    assert!(updated.updated_at >= created_at);

    let stored = repo.find_by_id(updated.id).await?.unwrap();
    assert_eq!(stored.last_name, "Brewster");

    Ok(())
}
