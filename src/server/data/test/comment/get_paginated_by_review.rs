use super::*;

/// Tests that comments are listed oldest first.
///
/// Expected: Ok with comments in publication order
#[tokio::test]
async fn lists_oldest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (author, _title, review) = factory::helpers::create_review_with_dependencies(&db).await?;
    let now = Utc::now();
    let newer = factory::comment::CommentFactory::new(&db, review.id, author.id)
        .pub_date(now)
        .build()
        .await?;
    let older = factory::comment::CommentFactory::new(&db, review.id, author.id)
        .pub_date(now - Duration::hours(1))
        .build()
        .await?;

    let page = CommentRepository::new(&db)
        .get_paginated_by_review(
            review.id,
            PageNumber {
                page: 1,
                per_page: 10,
            },
        )
        .await?;

    let ids: Vec<_> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
    assert_eq!(page.count, 2);

    Ok(())
}
