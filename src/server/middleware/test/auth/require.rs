use super::*;

/// Tests a coordinator passing the triage role check.
///
/// Expected: Ok(User) for the token's owner
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coordinator = factory::user::UserFactory::new(db)
        .role(UserRole::Coordinator)
        .access_token("coordinator-token")
        .build()
        .await?;

    let headers = bearer("coordinator-token");
    let user = AuthGuard::new(db, &headers).require(TRIAGE_ROLES).await?;

    assert_eq!(user.id, coordinator.id);
    assert_eq!(user.role, UserRole::Coordinator);

    Ok(())
}

/// Tests a coordinator failing the admin role check.
///
/// Verifies that an authenticated caller with the wrong role gets a 403
/// rather than a 401.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn denies_access_to_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .role(UserRole::Coordinator)
        .access_token("coordinator-token")
        .build()
        .await?;

    let headers = bearer("coordinator-token");
    let result = AuthGuard::new(db, &headers).require(ADMIN_ROLES).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingCredential)
#[tokio::test]
async fn fails_without_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredential))
    ));

    Ok(())
}

/// Tests a token that belongs to no user.
///
/// Expected: Err(AuthError::UnknownCredential)
#[tokio::test]
async fn fails_with_unknown_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer("no-such-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownCredential))
    ));

    Ok(())
}

/// Tests an empty role list.
///
/// Verifies that any authenticated user passes, including citizens.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_role_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let citizen = factory::user::UserFactory::new(db)
        .access_token("citizen-token")
        .build()
        .await?;

    let headers = bearer("citizen-token");
    let user = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(user.id, citizen.id);
    assert_eq!(user.role, UserRole::Citizen);

    Ok(())
}
