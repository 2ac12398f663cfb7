use super::*;

/// Tests the full path of a request from submission to completion.
///
/// A citizen submits, a coordinator approves and dispatches a team, and the
/// mission is completed. The team is checked after every step.
///
/// Expected: Request ends `completed`, team ends `available`
#[tokio::test]
async fn request_moves_from_submission_to_completion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let citizen = factory::user::create_citizen(db).await?;
    let coordinator = factory::user::create_coordinator(db).await?;
    let team = RescueTeamService::new(db)
        .create(team_params("Hue Swift Water"))
        .await?;

    let service = RescueRequestService::new(db);
    let team_service = RescueTeamService::new(db);

    let request = service
        .create(CreateRescueRequestParams {
            created_by: Some(citizen.id),
            ..gps_request_params()
        })
        .await?;
    assert_eq!(request.status, RequestStatus::New);

    let request = service.approve(request.id, coordinator.id, None).await?;
    assert_eq!(request.status, RequestStatus::PendingVerification);
    assert_eq!(team_service.get_by_id(team.id).await?.status, TeamStatus::Available);

    let request = service
        .assign_team(request.id, team.id, coordinator.id)
        .await?;
    assert_eq!(request.status, RequestStatus::OnMission);
    assert_eq!(team_service.get_by_id(team.id).await?.status, TeamStatus::OnMission);

    let request = service
        .complete_mission(request.id, coordinator.id, Some("Evacuated".to_string()))
        .await?;
    assert_eq!(request.status, RequestStatus::Completed);
    assert_eq!(request.created_by, Some(citizen.id));
    assert_eq!(request.assigned_team_id, Some(team.id));
    assert!(request
        .notes
        .as_deref()
        .is_some_and(|notes| notes.ends_with("\nCompleted: Evacuated")));
    assert_eq!(team_service.get_by_id(team.id).await?.status, TeamStatus::Available);

    let result = service.approve(request.id, coordinator.id, None).await;
    assert!(matches!(result, Err(AppError::InvalidState(_))));

    Ok(())
}

/// Tests that a released team can be dispatched again.
///
/// Expected: Ok for the second assignment
#[tokio::test]
async fn released_team_can_be_reassigned() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, team, request) = factory::helpers::create_active_mission(db).await?;
    let next = factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::PendingVerification)
        .verified_by(Some(coordinator.id))
        .build()
        .await?;

    let service = RescueRequestService::new(db);
    service
        .complete_mission(request.id, coordinator.id, None)
        .await?;
    let next = service.assign_team(next.id, team.id, coordinator.id).await?;

    assert_eq!(next.assigned_team_id, Some(team.id));

    Ok(())
}
