use super::*;
use crate::server::model::visit::Visit;

/// Tests checking out a visit through merge and update.
///
/// Expected: checkout time and charges stored
#[tokio::test]
async fn stores_checkout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let entity = factory::create_active_visit(db, customer.id, "A1").await?;
    let check_out = entity.check_in_time + Duration::hours(3);

    let repo = VisitRepository::new(db);
    let merged = Visit::from_entity(entity)
        .merge(UpdateVisitParams {
            check_out_time: Some(check_out),
            service_charges: Some(150.0),
            ..Default::default()
        })
        .unwrap();
    let updated = repo.update(merged).await?;

    assert_eq!(updated.check_out_time, Some(check_out));
    assert_eq!(updated.service_charges, 150.0);
    assert!(repo.get_active().await?.is_empty());

    Ok(())
}
