use super::*;

/// Tests that categories are ordered by name.
///
/// Expected: Ok with every category in name order and the total count
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    for (name, slug) in [("Music", "music"), ("Books", "books"), ("Films", "films")] {
        factory::category::CategoryFactory::new(&db)
            .name(name)
            .slug(slug)
            .build()
            .await?;
    }

    let page = CategoryRepository::new(&db)
        .get_paginated(None, first_page())
        .await?;

    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Books", "Films", "Music"]);
    assert_eq!(page.count, 3);

    Ok(())
}

/// Tests searching by a substring of the name or the slug.
///
/// Expected: Ok with only matching categories counted
#[tokio::test]
async fn filters_by_search_term() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    factory::category::CategoryFactory::new(&db)
        .name("Books")
        .slug("books")
        .build()
        .await?;
    factory::category::CategoryFactory::new(&db)
        .name("Cinema")
        .slug("films")
        .build()
        .await?;

    let page = CategoryRepository::new(&db)
        .get_paginated(Some("film"), first_page())
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].name, "Cinema");

    Ok(())
}

/// Tests limit and offset windowing.
///
/// Expected: Ok with the window requested while count covers all rows
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    for name in ["A", "B", "C", "D"] {
        factory::category::CategoryFactory::new(&db)
            .name(name)
            .build()
            .await?;
    }

    let page = CategoryRepository::new(&db)
        .get_paginated(
            None,
            LimitOffset {
                limit: 2,
                offset: 1,
            },
        )
        .await?;

    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C"]);
    assert_eq!(page.count, 4);
    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 1);

    Ok(())
}
