use super::*;

/// Tests deleting a team on a mission, then again after the mission ends.
///
/// Expected: Err(AppError::Conflict(TeamOnMission)) first, then Ok and the team
/// is no longer found
#[tokio::test]
async fn refuses_until_mission_completes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (coordinator, team, request) = factory::helpers::create_active_mission(db).await?;
    let service = RescueTeamService::new(db);

    let result = service.delete(team.id).await;
    assert!(matches!(
        result,
        Err(AppError::Conflict(ConflictError::TeamOnMission(_)))
    ));

    RescueRequestService::new(db)
        .complete_mission(request.id, coordinator.id, None)
        .await?;

    service.delete(team.id).await?;
    assert!(matches!(
        service.get_by_id(team.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a team that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RescueTeamService::new(db).delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
