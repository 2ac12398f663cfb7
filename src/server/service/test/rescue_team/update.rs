use super::*;

/// Tests updating team details.
///
/// Expected: Ok with the changed fields and the rest untouched
#[tokio::test]
async fn updates_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RescueTeamService::new(db);
    let team = service.create(team_params("Hue Flood Unit 1")).await?;

    let updated = service
        .update(
            team.id,
            UpdateRescueTeamParams {
                current_members: Some(4),
                equipment: Some(vec!["boat".to_string(), "life jackets".to_string()]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Hue Flood Unit 1");
    assert_eq!(updated.current_members, 4);
    assert_eq!(updated.equipment, vec!["boat", "life jackets"]);
    assert!(updated.updated_at >= team.updated_at);

    Ok(())
}

/// Tests renaming a team to the name of another live team.
///
/// Expected: Err(AppError::Conflict(DuplicateTeamName))
#[tokio::test]
async fn rejects_rename_to_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RescueTeamService::new(db);
    service.create(team_params("Hue Flood Unit 1")).await?;
    let second = service.create(team_params("Hue Flood Unit 2")).await?;

    let result = service
        .update(
            second.id,
            UpdateRescueTeamParams {
                name: Some("Hue Flood Unit 1".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ConflictError::DuplicateTeamName(_)))
    ));

    Ok(())
}

/// Tests sending the team's own name back.
///
/// Expected: Ok, a team does not conflict with itself
#[tokio::test]
async fn allows_keeping_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RescueTeamService::new(db);
    let team = service.create(team_params("Hue Flood Unit 1")).await?;

    let updated = service
        .update(
            team.id,
            UpdateRescueTeamParams {
                name: Some("Hue Flood Unit 1".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Hue Flood Unit 1");

    Ok(())
}

/// Tests updating a deleted team.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_deleted_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::rescue_team::RescueTeamFactory::new(db)
        .deleted()
        .build()
        .await?;

    let result = RescueTeamService::new(db)
        .update(
            team.id,
            UpdateRescueTeamParams {
                notes: Some("Back from leave".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
