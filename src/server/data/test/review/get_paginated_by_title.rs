use super::*;

/// Tests that reviews are listed newest first and paged.
///
/// Expected: Ok with the newest two reviews on page 1 and the oldest on page 2
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let title = factory::create_title(&db).await?;
    let now = Utc::now();
    let mut ids = Vec::new();
    for days_ago in [3, 1, 2] {
        let author = factory::create_user(&db).await?;
        let review = factory::review::ReviewFactory::new(&db, title.id, author.id)
            .pub_date(now - Duration::days(days_ago))
            .build()
            .await?;
        ids.push(review.id);
    }

    let repo = ReviewRepository::new(&db);
    let first = repo
        .get_paginated_by_title(
            title.id,
            PageNumber {
                page: 1,
                per_page: 2,
            },
        )
        .await?;
    let second = repo
        .get_paginated_by_title(
            title.id,
            PageNumber {
                page: 2,
                per_page: 2,
            },
        )
        .await?;

    let first_ids: Vec<_> = first.items.iter().map(|r| r.id).collect();
    assert_eq!(first_ids, vec![ids[1], ids[2]]);
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id, ids[0]);
    assert_eq!(first.count, 3);
    assert_eq!(first.total_pages, 2);

    Ok(())
}

/// Tests that reviews of other titles are excluded.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn excludes_other_titles() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    factory::helpers::create_review_with_dependencies(&db).await?;
    let empty = factory::create_title(&db).await?;

    let page = ReviewRepository::new(&db)
        .get_paginated_by_title(
            empty.id,
            PageNumber {
                page: 1,
                per_page: 10,
            },
        )
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.count, 0);

    Ok(())
}
