use super::*;

/// Tests creating a visit for an existing customer.
///
/// Expected: Ok(Visit) that is active and keeps the given charges
#[tokio::test]
async fn creates_active_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let check_in = Utc::now() - Duration::hours(2);

    let visit = VisitRepository::new(db)
        .create(CreateVisitParams {
            customer_id: customer.id,
            check_in_time: check_in,
            check_out_time: None,
            dock_number: "C3".to_string(),
            boat_name: Some("Wanderer".to_string()),
            boat_type: Some("Sloop".to_string()),
            service_charges: 42.5,
            services_used: None,
            notes: None,
        })
        .await?;

    assert_eq!(visit.customer_id, customer.id);
    assert_eq!(visit.dock_number, "C3");
    assert_eq!(visit.check_out_time, None);
    assert_eq!(visit.service_charges, 42.5);

    Ok(())
}
