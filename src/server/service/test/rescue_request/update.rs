use super::*;

/// Tests an administrative correction of priority and notes.
///
/// Expected: Ok with the new values and status unchanged
#[tokio::test]
async fn updates_whitelisted_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::create_coordinator(db).await?;
    let request = factory::rescue_request::create_request(db).await?;

    let updated = RescueRequestService::new(db)
        .update(
            request.id,
            coordinator.id,
            UpdateRescueRequestParams {
                priority: Some(entity::rescue_request::RequestPriority::Urgent),
                notes: Some("Elderly resident, needs stretcher".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(
        updated.priority,
        Some(entity::rescue_request::RequestPriority::Urgent)
    );
    assert_eq!(
        updated.notes.as_deref(),
        Some("Elderly resident, needs stretcher")
    );
    assert_eq!(updated.status, RequestStatus::New);

    Ok(())
}

/// Tests moving a request along a transition that involves no team.
///
/// Expected: Ok with status `pending_verification`
#[tokio::test]
async fn allows_status_change_without_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let request = factory::rescue_request::create_request(db).await?;

    let updated = RescueRequestService::new(db)
        .update(
            request.id,
            admin.id,
            UpdateRescueRequestParams {
                status: Some(RequestStatus::PendingVerification),
                verified_by: Some(admin.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::PendingVerification);
    assert_eq!(updated.verified_by, Some(admin.id));

    Ok(())
}

/// Tests bypassing the paired team operations through update.
///
/// Verifies that neither `on_mission` nor `completed` can be reached through
/// an update, and that backwards moves are refused too.
///
/// Expected: Err(AppError::InvalidState) and the team untouched
#[tokio::test]
async fn refuses_status_changes_involving_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, team, request) = factory::helpers::create_active_mission(db).await?;
    let pending = factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::PendingVerification)
        .build()
        .await?;

    let service = RescueRequestService::new(db);
    let cases = [
        (request.id, RequestStatus::Completed),
        (request.id, RequestStatus::New),
        (pending.id, RequestStatus::OnMission),
        (pending.id, RequestStatus::New),
    ];
    for (id, status) in cases {
        let result = service
            .update(
                id,
                coordinator.id,
                UpdateRescueRequestParams {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await;
        assert!(
            matches!(result, Err(AppError::InvalidState(_))),
            "update to {:?} should be refused",
            status
        );
    }

    let team = RescueTeamService::new(db).get_by_id(team.id).await?;
    assert_eq!(team.status, TeamStatus::OnMission);
    assert_eq!(
        service.get_by_id(request.id).await?.status,
        RequestStatus::OnMission
    );

    Ok(())
}

/// Tests sending the current status back unchanged.
///
/// Expected: Ok, the status is not treated as a transition
#[tokio::test]
async fn allows_unchanged_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, _team, request) = factory::helpers::create_active_mission(db).await?;

    let updated = RescueRequestService::new(db)
        .update(
            request.id,
            coordinator.id,
            UpdateRescueRequestParams {
                status: Some(RequestStatus::OnMission),
                notes: Some("Team reports heavy rain".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, RequestStatus::OnMission);
    assert_eq!(updated.notes.as_deref(), Some("Team reports heavy rain"));

    Ok(())
}

/// Tests two admins changing the status of the same request at once.
///
/// Verifies that a status change checked against a status that has since
/// changed is not written over the winner.
///
/// Expected: Exactly one update succeeds and the stored status is the winner's
#[tokio::test]
async fn concurrent_status_changes_do_not_overwrite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let request = factory::rescue_request::create_request(db).await?;

    let reject = UpdateRescueRequestParams {
        status: Some(RequestStatus::Rejected),
        ..Default::default()
    };
    let verify = UpdateRescueRequestParams {
        status: Some(RequestStatus::PendingVerification),
        ..Default::default()
    };

    let service = RescueRequestService::new(db);
    let (reject_result, verify_result) = tokio::join!(
        service.update(request.id, admin.id, reject),
        service.update(request.id, admin.id, verify),
    );

    let (winner, loser) = match (reject_result, verify_result) {
        (Ok(winner), loser) => (winner, loser),
        (loser, Ok(winner)) => (winner, loser),
        (a, b) => panic!("Expected one update to succeed, got: {:?} / {:?}", a, b),
    };

    assert!(matches!(
        loser,
        Err(AppError::Conflict(ConflictError::RequestStateChanged(_)))
            | Err(AppError::InvalidState(_))
    ));

    let stored = service.get_by_id(request.id).await?;
    assert_eq!(stored.status, winner.status);

    Ok(())
}
