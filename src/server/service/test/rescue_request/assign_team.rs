use super::*;

/// Tests dispatching an available team to a verified request.
///
/// Expected: Ok with the request on a mission and the team on a mission
#[tokio::test]
async fn assigns_available_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, team, request) = factory::helpers::create_assignable_request(db).await?;

    let assigned = RescueRequestService::new(db)
        .assign_team(request.id, team.id, coordinator.id)
        .await?;

    assert_eq!(assigned.status, RequestStatus::OnMission);
    assert_eq!(assigned.assigned_team_id, Some(team.id));
    assert_eq!(assigned.assigned_by, Some(coordinator.id));
    assert!(assigned.assigned_at.is_some());

    let team = RescueTeamService::new(db).get_by_id(team.id).await?;
    assert_eq!(team.status, TeamStatus::OnMission);

    Ok(())
}

/// Tests dispatching a team that is already on a mission.
///
/// Expected: Err(ConflictError::TeamNotAvailable) and the request unchanged
#[tokio::test]
async fn refuses_unavailable_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, _team, request) = factory::helpers::create_assignable_request(db).await?;
    let busy = factory::rescue_team::RescueTeamFactory::new(db)
        .status(TeamStatus::OnMission)
        .build()
        .await?;

    let service = RescueRequestService::new(db);
    let result = service.assign_team(request.id, busy.id, coordinator.id).await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ConflictError::TeamNotAvailable(id))) if id == busy.id
    ));
    let request = service.get_by_id(request.id).await?;
    assert_eq!(request.status, RequestStatus::PendingVerification);
    assert!(request.assigned_team_id.is_none());

    Ok(())
}

/// Tests dispatching a team that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, _team, request) = factory::helpers::create_assignable_request(db).await?;

    let result = RescueRequestService::new(db)
        .assign_team(request.id, Uuid::new_v4(), coordinator.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests dispatching to a request that has not been approved.
///
/// Verifies that the team is left available.
///
/// Expected: Err(AppError::InvalidState)
#[tokio::test]
async fn refuses_unapproved_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::create_coordinator(db).await?;
    let team = factory::rescue_team::create_team(db).await?;
    let request = factory::rescue_request::create_request(db).await?;

    let result = RescueRequestService::new(db)
        .assign_team(request.id, team.id, coordinator.id)
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));
    let team = RescueTeamService::new(db).get_by_id(team.id).await?;
    assert_eq!(team.status, TeamStatus::Available);

    Ok(())
}

/// Tests two dispatchers racing for the same team.
///
/// Two verified requests are assigned the same available team concurrently.
///
/// Expected: Exactly one assignment succeeds, the other fails with
/// TeamNotAvailable and its request stays unassigned
#[tokio::test]
async fn only_one_concurrent_assignment_claims_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, team, first) = factory::helpers::create_assignable_request(db).await?;
    let second = factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::PendingVerification)
        .verified_by(Some(coordinator.id))
        .build()
        .await?;

    let service = RescueRequestService::new(db);
    let (first_result, second_result) = tokio::join!(
        service.assign_team(first.id, team.id, coordinator.id),
        service.assign_team(second.id, team.id, coordinator.id),
    );

    let (winner, loser_result, loser_id) = match (first_result, second_result) {
        (Ok(winner), loser) => (winner, loser, second.id),
        (loser, Ok(winner)) => (winner, loser, first.id),
        (a, b) => panic!("Expected one assignment to succeed, got: {:?} / {:?}", a, b),
    };

    assert_eq!(winner.assigned_team_id, Some(team.id));
    assert!(matches!(
        loser_result,
        Err(AppError::Conflict(ConflictError::TeamNotAvailable(_)))
    ));

    let loser = service.get_by_id(loser_id).await?;
    assert_eq!(loser.status, RequestStatus::PendingVerification);
    assert!(loser.assigned_team_id.is_none());

    let team = RescueTeamService::new(db).get_by_id(team.id).await?;
    assert_eq!(team.status, TeamStatus::OnMission);

    Ok(())
}

/// Tests two dispatchers assigning different teams to the same request.
///
/// Verifies that the losing dispatch releases the team it claimed, so no team
/// is left on a mission without a request.
///
/// Expected: One team on a mission, the other still available
#[tokio::test]
async fn losing_assignment_leaves_its_team_available() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, first_team, request) =
        factory::helpers::create_assignable_request(db).await?;
    let second_team = factory::rescue_team::create_team(db).await?;

    let service = RescueRequestService::new(db);
    let (first_result, second_result) = tokio::join!(
        service.assign_team(request.id, first_team.id, coordinator.id),
        service.assign_team(request.id, second_team.id, coordinator.id),
    );

    assert_eq!(
        [first_result.is_ok(), second_result.is_ok()]
            .iter()
            .filter(|ok| **ok)
            .count(),
        1
    );

    let request = service.get_by_id(request.id).await?;
    let assigned = request.assigned_team_id.unwrap();

    let team_service = RescueTeamService::new(db);
    for team_id in [first_team.id, second_team.id] {
        let team = team_service.get_by_id(team_id).await?;
        let expected = if team_id == assigned {
            TeamStatus::OnMission
        } else {
            TeamStatus::Available
        };
        assert_eq!(team.status, expected);
    }

    Ok(())
}
