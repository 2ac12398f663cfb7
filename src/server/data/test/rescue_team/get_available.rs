use super::*;

/// Tests listing available teams.
///
/// Verifies that only live teams with status `available` are returned, oldest
/// first, and that a status filter is ignored.
///
/// Expected: The two available teams in creation order
#[tokio::test]
async fn returns_available_teams_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let newer = factory::rescue_team::RescueTeamFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let older = factory::rescue_team::RescueTeamFactory::new(db)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    factory::rescue_team::RescueTeamFactory::new(db)
        .status(TeamStatus::OnMission)
        .build()
        .await?;
    factory::rescue_team::RescueTeamFactory::new(db)
        .status(TeamStatus::Unavailable)
        .build()
        .await?;
    factory::rescue_team::RescueTeamFactory::new(db)
        .deleted()
        .build()
        .await?;

    let filter = RescueTeamFilter {
        status: Some(TeamStatus::OnMission),
        ..Default::default()
    };
    let teams = RescueTeamRepository::new(db).get_available(&filter).await?;

    let ids: Vec<_> = teams.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}

/// Tests narrowing available teams by specialization.
///
/// Expected: Only the medical team
#[tokio::test]
async fn filters_available_teams_by_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let medical = factory::rescue_team::RescueTeamFactory::new(db)
        .specialization(TeamSpecialization::Medical)
        .build()
        .await?;
    factory::rescue_team::create_team(db).await?;

    let filter = RescueTeamFilter {
        specialization: Some(TeamSpecialization::Medical),
        ..Default::default()
    };
    let teams = RescueTeamRepository::new(db).get_available(&filter).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, medical.id);

    Ok(())
}
