use super::*;

/// Tests the average over recorded actual costs.
///
/// Expected: requests without a cost counted but excluded from the mean
#[tokio::test]
async fn averages_recorded_costs_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    factory::service_request::ServiceRequestFactory::new(db, customer.id)
        .service_type("Fuel")
        .actual_cost(100.0)
        .build()
        .await?;
    factory::service_request::ServiceRequestFactory::new(db, customer.id)
        .service_type("Fuel")
        .actual_cost(50.0)
        .build()
        .await?;
    factory::service_request::ServiceRequestFactory::new(db, customer.id)
        .service_type("Fuel")
        .build()
        .await?;
    factory::service_request::ServiceRequestFactory::new(db, customer.id)
        .service_type("Pump-out")
        .status(ServiceRequestStatus::Completed)
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);
    let by_type = repo.requests_by_type().await?;

    let fuel = by_type.iter().find(|r| r.service_type == "Fuel").unwrap();
    assert_eq!(fuel.count, 3);
    assert_eq!(fuel.avg_cost, 75.0);

    let pump_out = by_type
        .iter()
        .find(|r| r.service_type == "Pump-out")
        .unwrap();
    assert_eq!(pump_out.count, 1);
    assert_eq!(pump_out.avg_cost, 0.0);

    let by_status = repo.requests_by_status().await?;
    assert_eq!(by_status.len(), 2);
    assert!(by_status
        .iter()
        .any(|r| r.status == ServiceRequestStatus::Pending && r.count == 3));

    Ok(())
}
