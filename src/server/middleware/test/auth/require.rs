use super::*;

/// Tests a request without an authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let tokens = token_service();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an authorization header using another scheme.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let tokens = token_service();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_forged_token() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let user = factory::user::create_user(&db).await?;
    let forger = AccessTokenService::new("another-secret", Duration::minutes(5));
    let headers = bearer_headers(&forger, &user);

    let result = AuthGuard::new(&db, &token_service(), &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user does not exist.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_missing_user() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let tokens = token_service();
    let mut ghost = factory::user::create_user(&db).await?;
    ghost.id += 1000;
    let headers = bearer_headers(&tokens, &ghost);

    let result = AuthGuard::new(&db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests an authenticated user without extra permissions.
///
/// Expected: Ok(User) matching the token's user
#[tokio::test]
async fn authenticates_valid_token() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let tokens = token_service();
    let user = factory::user::create_user(&db).await?;
    let headers = bearer_headers(&tokens, &user);

    let returned = AuthGuard::new(&db, &tokens, &headers)
        .require(&[Permission::Capability(Capability::CreateContent)])
        .await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, user.username);

    Ok(())
}

/// Tests a plain user asking to manage the catalog.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_catalog_management_to_plain_user() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let tokens = token_service();
    let user = factory::user::create_user(&db).await?;
    let headers = bearer_headers(&tokens, &user);

    let result = AuthGuard::new(&db, &tokens, &headers)
        .require(&[Permission::Capability(Capability::ManageCatalog)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin asking to manage the catalog.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_catalog_management_to_admin() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let tokens = token_service();
    let admin = factory::user::create_user_with_role(&db, Role::Admin).await?;
    let headers = bearer_headers(&tokens, &admin);

    let result = AuthGuard::new(&db, &tokens, &headers)
        .require(&[Permission::Capability(Capability::ManageCatalog)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that every permission in the list must hold.
///
/// Expected: Err(AuthError::AccessDenied) for a moderator lacking ManageUsers
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let (_test, db) = user_db().await;
    let tokens = token_service();
    let moderator = factory::user::create_user_with_role(&db, Role::Moderator).await?;
    let headers = bearer_headers(&tokens, &moderator);

    let result = AuthGuard::new(&db, &tokens, &headers)
        .require(&[
            Permission::Capability(Capability::ModerateContent),
            Permission::Capability(Capability::ManageUsers),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
