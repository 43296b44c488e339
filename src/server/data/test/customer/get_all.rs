use super::*;
use chrono::{Duration, Utc};

/// Tests listing order.
///
/// Expected: newest customer first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::customer::CustomerFactory::new(db)
        .created_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let newer = factory::create_customer(db).await?;

    let customers = CustomerRepository::new(db).get_all(None).await?;

    let ids: Vec<i32> = customers.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests searching across name, email and phone.
///
/// Expected: only customers with a matching field, ignoring letter case
#[tokio::test]
async fn searches_name_email_and_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::customer::CustomerFactory::new(db)
        .first_name("Ada")
        .last_name("Lovelace")
        .email("ada@engine.org")
        .build()
        .await?;
    let phoned = factory::customer::CustomerFactory::new(db)
        .phone("555-7788")
        .build()
        .await?;
    factory::create_customer(db).await?;

    let repo = CustomerRepository::new(db);

    let by_name = repo.get_all(Some("lovel")).await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, ada.id);

    let by_email = repo.get_all(Some("engine.org")).await?;
    assert_eq!(by_email.len(), 1);

    let by_phone = repo.get_all(Some("7788")).await?;
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].id, phoned.id);

    let blank = repo.get_all(Some("  ")).await?;
    assert_eq!(blank.len(), 3);

    Ok(())
}
