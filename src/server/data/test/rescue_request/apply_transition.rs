use super::*;

/// Tests approving a new request.
///
/// Verifies that the transition stamps the verifier and the notes.
///
/// Expected: Ok(Some) with status `pending_verification`
#[tokio::test]
async fn applies_transition_from_source_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::create_coordinator(db).await?;
    let request = factory::rescue_request::create_request(db).await?;

    let approved = RescueRequestRepository::new(db)
        .apply_transition(
            request.id,
            &RequestTransition::Approve {
                verified_by: coordinator.id,
                notes: "Confirmed by phone".to_string(),
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(approved.status, RequestStatus::PendingVerification);
    assert_eq!(approved.verified_by, Some(coordinator.id));
    assert!(approved.verified_at.is_some());
    assert_eq!(approved.notes.as_deref(), Some("Confirmed by phone"));

    Ok(())
}

/// Tests assigning a team.
///
/// Expected: Ok(Some) with team, dispatcher and assignment time stamped
#[tokio::test]
async fn stamps_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, team, request) = factory::helpers::create_assignable_request(db).await?;

    let assigned = RescueRequestRepository::new(db)
        .apply_transition(
            request.id,
            &RequestTransition::Assign {
                team_id: team.id,
                assigned_by: coordinator.id,
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(assigned.status, RequestStatus::OnMission);
    assert_eq!(assigned.assigned_team_id, Some(team.id));
    assert_eq!(assigned.assigned_by, Some(coordinator.id));
    assert!(assigned.assigned_at.is_some());

    Ok(())
}

/// Tests applying a transition whose source status no longer matches.
///
/// Verifies that the compare-and-set leaves the row untouched.
///
/// Expected: Ok(None) and the request keeps its status and notes
#[tokio::test]
async fn leaves_row_untouched_on_stale_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::create_coordinator(db).await?;
    let request = factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::Rejected)
        .notes("Rejected: duplicate")
        .build()
        .await?;

    let repo = RescueRequestRepository::new(db);
    let result = repo
        .apply_transition(
            request.id,
            &RequestTransition::Approve {
                verified_by: coordinator.id,
                notes: "late approval".to_string(),
            },
            Utc::now(),
        )
        .await?;

    assert!(result.is_none());
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, RequestStatus::Rejected);
    assert_eq!(stored.notes.as_deref(), Some("Rejected: duplicate"));
    assert!(stored.verified_by.is_none());

    Ok(())
}

/// Tests applying a transition to a deleted request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::create_coordinator(db).await?;
    let request = factory::rescue_request::RescueRequestFactory::new(db)
        .deleted()
        .build()
        .await?;

    let result = RescueRequestRepository::new(db)
        .apply_transition(
            request.id,
            &RequestTransition::Reject {
                verified_by: coordinator.id,
                notes: "Rejected: spam".to_string(),
            },
            Utc::now(),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
