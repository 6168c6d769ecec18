use super::*;

/// Tests that genres are ordered by name.
///
/// Expected: Ok with every genre in name order
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    for (name, slug) in [("Western", "western"), ("Comedy", "comedy"), ("Drama", "drama")] {
        factory::genre::GenreFactory::new(&db)
            .name(name)
            .slug(slug)
            .build()
            .await?;
    }

    let page = GenreRepository::new(&db)
        .get_paginated(None, first_page())
        .await?;

    let names: Vec<_> = page.items.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Comedy", "Drama", "Western"]);
    assert_eq!(page.count, 3);

    Ok(())
}

/// Tests searching by a substring of the slug.
///
/// Expected: Ok with only matching genres counted
#[tokio::test]
async fn filters_by_search_term() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    factory::genre::GenreFactory::new(&db)
        .name("Science fiction")
        .slug("sci-fi")
        .build()
        .await?;
    factory::genre::GenreFactory::new(&db)
        .name("Drama")
        .slug("drama")
        .build()
        .await?;

    let page = GenreRepository::new(&db)
        .get_paginated(Some("sci"), first_page())
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].slug, "sci-fi");

    Ok(())
}
