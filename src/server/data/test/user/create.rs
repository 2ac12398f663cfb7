use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the user found again by id and email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rescue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUser {
            email: "dispatch@relief.example.org".to_string(),
            name: "Dispatch Desk".to_string(),
            role: UserRole::Coordinator,
            access_token: "dispatch-token".to_string(),
        })
        .await?;

    assert_eq!(user.role, UserRole::Coordinator);
    assert_eq!(repo.find_by_id(user.id).await?, Some(user.clone()));
    assert_eq!(
        repo.find_by_email("dispatch@relief.example.org").await?,
        Some(user)
    );

    Ok(())
}
