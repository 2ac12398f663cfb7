use super::*;

/// Tests paginating teams.
///
/// Verifies that teams are returned newest first and that the total counts
/// every match, not just the page.
///
/// Expected: Ok with 2 of 3 teams on the first page
#[tokio::test]
async fn returns_newest_first_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::rescue_team::RescueTeamFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let middle = factory::rescue_team::RescueTeamFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newest = factory::rescue_team::RescueTeamFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let repo = RescueTeamRepository::new(db);
    let (teams, total) = repo
        .get_paginated(&RescueTeamFilter::default(), PageRequest::new(1, 2))
        .await?;

    assert_eq!(total, 3);
    let ids: Vec<_> = teams.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);

    let (teams, _) = repo
        .get_paginated(&RescueTeamFilter::default(), PageRequest::new(2, 2))
        .await?;
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, oldest.id);

    Ok(())
}

/// Tests filtering teams.
///
/// Verifies that status, specialization and province filters combine and
/// that soft-deleted teams are excluded.
///
/// Expected: Only the matching live team
#[tokio::test]
async fn applies_filters_and_skips_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::rescue_team::RescueTeamFactory::new(db)
        .province_city("Da Nang")
        .specialization(TeamSpecialization::Medical)
        .build()
        .await?;
    factory::rescue_team::RescueTeamFactory::new(db)
        .province_city("Da Nang")
        .specialization(TeamSpecialization::Medical)
        .status(TeamStatus::OnMission)
        .build()
        .await?;
    factory::rescue_team::RescueTeamFactory::new(db)
        .province_city("Da Nang")
        .specialization(TeamSpecialization::Medical)
        .deleted()
        .build()
        .await?;
    factory::rescue_team::RescueTeamFactory::new(db)
        .province_city("Hue")
        .specialization(TeamSpecialization::Medical)
        .build()
        .await?;

    let filter = RescueTeamFilter {
        status: Some(TeamStatus::Available),
        specialization: Some(TeamSpecialization::Medical),
        province_city: Some("Da Nang".to_string()),
    };
    let (teams, total) = RescueTeamRepository::new(db)
        .get_paginated(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(teams[0].id, matching.id);

    Ok(())
}
