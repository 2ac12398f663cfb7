use super::*;

/// Tests a status patch checked against a status that is no longer current.
///
/// Verifies that the write is refused and nothing in the row changes.
///
/// Expected: Ok(None) and the request keeps its status and notes
#[tokio::test]
async fn refuses_stale_status_patch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::Rejected)
        .notes("Duplicate report")
        .build()
        .await?;

    let repo = RescueRequestRepository::new(db);
    let params = UpdateRescueRequestParams {
        status: Some(RequestStatus::PendingVerification),
        notes: Some("Reopened".to_string()),
        ..Default::default()
    };

    let result = repo
        .update(request.id, params, Some(RequestStatus::New), Utc::now())
        .await?;
    assert!(result.is_none());

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Rejected);
    assert_eq!(stored.notes.as_deref(), Some("Duplicate report"));

    Ok(())
}

/// Tests a status patch whose expected status matches the stored one.
///
/// Expected: Ok(Some) with the new status and priority
#[tokio::test]
async fn applies_patch_when_status_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::rescue_request::create_request(db).await?;

    let params = UpdateRescueRequestParams {
        status: Some(RequestStatus::Rejected),
        notes: Some("Caller reached safety".to_string()),
        ..Default::default()
    };

    let updated = RescueRequestRepository::new(db)
        .update(request.id, params, Some(RequestStatus::New), Utc::now())
        .await?
        .unwrap();

    assert_eq!(updated.status, RequestStatus::Rejected);
    assert_eq!(updated.notes.as_deref(), Some("Caller reached safety"));

    Ok(())
}

/// Tests a patch without a status.
///
/// Verifies that no status guard applies and the status column is left alone.
///
/// Expected: Ok(Some) with the notes changed and the status unchanged
#[tokio::test]
async fn notes_patch_ignores_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::Completed)
        .build()
        .await?;

    let params = UpdateRescueRequestParams {
        notes: Some("Family relocated to shelter".to_string()),
        ..Default::default()
    };

    let updated = RescueRequestRepository::new(db)
        .update(request.id, params, None, Utc::now())
        .await?
        .unwrap();

    assert_eq!(updated.status, RequestStatus::Completed);
    assert_eq!(updated.notes.as_deref(), Some("Family relocated to shelter"));

    Ok(())
}

/// Tests patching a soft-deleted request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_deleted_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::rescue_request::RescueRequestFactory::new(db)
        .deleted()
        .build()
        .await?;

    let params = UpdateRescueRequestParams {
        notes: Some("Too late".to_string()),
        ..Default::default()
    };

    let result = RescueRequestRepository::new(db)
        .update(request.id, params, None, Utc::now())
        .await?;
    assert!(result.is_none());

    Ok(())
}
