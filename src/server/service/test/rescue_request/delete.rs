use super::*;

/// Tests deleting a request.
///
/// Expected: Ok and the request is no longer found
#[tokio::test]
async fn soft_deletes_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let request = factory::rescue_request::create_request(db).await?;

    let service = RescueRequestService::new(db);
    service.delete(request.id, admin.id).await?;

    assert!(matches!(
        service.get_by_id(request.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(request.id, admin.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a request whose team is on the mission.
///
/// Expected: Ok and the team is available again
#[tokio::test]
async fn releases_team_of_active_mission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let (_coordinator, team, request) = factory::helpers::create_active_mission(db).await?;

    RescueRequestService::new(db)
        .delete(request.id, admin.id)
        .await?;

    let team = RescueTeamService::new(db).get_by_id(team.id).await?;
    assert_eq!(team.status, TeamStatus::Available);

    Ok(())
}

/// Tests a coordinator attempting to delete.
///
/// Expected: Err(AppError::Forbidden) and the request still present
#[tokio::test]
async fn forbids_coordinator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::create_coordinator(db).await?;
    let request = factory::rescue_request::create_request(db).await?;

    let service = RescueRequestService::new(db);
    let result = service.delete(request.id, coordinator.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(service.get_by_id(request.id).await.is_ok());

    Ok(())
}

/// Tests deleting a finished mission whose team has been dispatched again.
///
/// Verifies that only a request still on its mission releases the team, so the
/// team's new mission is left alone.
///
/// Expected: Ok, the team and its new request both still on a mission
#[tokio::test]
async fn leaves_reassigned_team_on_new_mission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let (coordinator, team, finished) = factory::helpers::create_active_mission(db).await?;
    let next = factory::rescue_request::RescueRequestFactory::new(db)
        .status(RequestStatus::PendingVerification)
        .verified_by(Some(coordinator.id))
        .build()
        .await?;

    let service = RescueRequestService::new(db);
    service
        .complete_mission(finished.id, coordinator.id, None)
        .await?;
    service.assign_team(next.id, team.id, coordinator.id).await?;

    service.delete(finished.id, admin.id).await?;

    let team = RescueTeamService::new(db).get_by_id(team.id).await?;
    assert_eq!(team.status, TeamStatus::OnMission);

    let next = service.get_by_id(next.id).await?;
    assert_eq!(next.status, RequestStatus::OnMission);
    assert_eq!(next.assigned_team_id, Some(team.id));

    Ok(())
}
