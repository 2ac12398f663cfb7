use super::*;

/// Tests statistics over an empty table.
///
/// Verifies that every status and category is reported with a zero count.
///
/// Expected: Ok with total 0 and 5 statuses and 4 categories at zero
#[tokio::test]
async fn reports_zero_counts_for_every_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = RescueRequestRepository::new(db).statistics().await?;

    assert_eq!(stats.total, 0);
    assert_eq!(stats.by_status.len(), 5);
    assert_eq!(stats.by_category.len(), 4);
    assert!(stats.by_status.iter().all(|(_, count)| *count == 0));
    assert!(stats.by_category.iter().all(|(_, count)| *count == 0));

    Ok(())
}

/// Tests grouping live requests.
///
/// Expected: Counts per status and category, deleted requests excluded
#[tokio::test]
async fn groups_live_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rescue_request::create_request(db).await?;
    factory::rescue_request::RescueRequestFactory::new(db)
        .category(RequestCategory::Supplies)
        .build()
        .await?;
    factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::Rejected)
        .build()
        .await?;
    factory::rescue_request::RescueRequestFactory::new(db)
        .deleted()
        .build()
        .await?;

    let stats = RescueRequestRepository::new(db).statistics().await?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.count_for_status(RequestStatus::New), 2);
    assert_eq!(stats.count_for_status(RequestStatus::Rejected), 1);
    assert_eq!(stats.count_for_status(RequestStatus::Completed), 0);
    assert!(stats
        .by_category
        .contains(&(RequestCategory::Rescue, 2)));
    assert!(stats
        .by_category
        .contains(&(RequestCategory::Supplies, 1)));

    Ok(())
}
