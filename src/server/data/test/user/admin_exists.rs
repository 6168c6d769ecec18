use super::*;

/// Tests with only regular users present.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admins() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    factory::create_user(&db).await?;
    factory::user::create_user_with_role(&db, Role::Moderator).await?;

    assert!(!UserRepository::new(&db).admin_exists().await?);

    Ok(())
}

/// Tests with a user holding the admin role.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_admin_role() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    factory::user::create_user_with_role(&db, Role::Admin).await?;

    assert!(UserRepository::new(&db).admin_exists().await?);

    Ok(())
}

/// Tests with a staff user holding the plain user role.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_staff_flag() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    factory::user::UserFactory::new(&db).staff(true).build().await?;

    assert!(UserRepository::new(&db).admin_exists().await?);

    Ok(())
}

/// Tests with a superuser holding the plain user role.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_superuser_flag() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    factory::user::UserFactory::new(&db)
        .superuser(true)
        .build()
        .await?;

    assert!(UserRepository::new(&db).admin_exists().await?);

    Ok(())
}
