use super::*;

/// Tests username search with numbered pages.
///
/// Expected: Ok with matching users in username order across pages
#[tokio::test]
async fn searches_and_pages_by_username() -> Result<(), DbErr> {
    let (_test, db) = user_db().await;
    for username in ["carol", "alice", "bob", "alina"] {
        factory::user::UserFactory::new(&db)
            .username(username)
            .build()
            .await?;
    }

    let page = UserRepository::new(&db)
        .get_paginated(
            Some("al"),
            PageNumber {
                page: 1,
                per_page: 1,
            },
        )
        .await?;

    assert_eq!(page.count, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items[0].username, "alice");

    Ok(())
}
