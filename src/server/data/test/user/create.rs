use super::*;

/// Tests creating a user through signup parameters.
///
/// Expected: Ok with the default user role and no staff flags
#[tokio::test]
async fn creates_user_with_default_role() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;

    let user = UserRepository::new(&db)
        .create(CreateUserParams::signup(
            "critic".to_string(),
            "critic@example.com".to_string(),
        ))
        .await?;

    assert_eq!(user.username, "critic");
    assert_eq!(user.role, Role::User);
    assert!(!user.is_admin());

    Ok(())
}

/// Tests creating a user whose username is already taken.
///
/// Expected: Err from the unique username index
#[tokio::test]
async fn fails_for_duplicate_username() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    factory::user::UserFactory::new(&db)
        .username("critic")
        .build()
        .await?;

    let result = UserRepository::new(&db)
        .create(CreateUserParams::signup(
            "critic".to_string(),
            "other@example.com".to_string(),
        ))
        .await;

    assert!(result.is_err());

    Ok(())
}
