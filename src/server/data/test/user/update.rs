use super::*;

/// Tests a partial profile update.
///
/// Expected: Ok with bio and role changed and the username kept
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    let user = factory::user::UserFactory::new(&db)
        .username("critic")
        .build()
        .await?;

    let updated = UserRepository::new(&db)
        .update(
            user.id,
            UpdateUserParams {
                bio: Some("Film buff".to_string()),
                role: Some(Role::Moderator),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.username, "critic");
    assert_eq!(updated.bio.as_deref(), Some("Film buff"));
    assert!(updated.is_moderator());

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;

    let result = UserRepository::new(&db)
        .update(404, UpdateUserParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
