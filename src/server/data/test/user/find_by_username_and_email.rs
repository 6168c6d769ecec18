use super::*;

/// Tests that both username and email must match.
///
/// Expected: Ok(Some) for the exact pair, Ok(None) when the email differs
#[tokio::test]
async fn requires_both_fields() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    factory::user::UserFactory::new(&db)
        .username("critic")
        .email("critic@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(&db);
    let found = repo
        .find_by_username_and_email("critic", "critic@example.com")
        .await?;
    let mismatched = repo
        .find_by_username_and_email("critic", "someone@example.com")
        .await?;

    assert!(found.is_some());
    assert!(mismatched.is_none());

    Ok(())
}
