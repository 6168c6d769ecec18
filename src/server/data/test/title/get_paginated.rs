use super::*;

/// Tests filtering by genre.
///
/// Expected: Ok with only the titles carrying the genre
#[tokio::test]
async fn filters_by_genre() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let genre = factory::create_genre(&db).await?;
    let tagged = factory::create_title(&db).await?;
    factory::create_title(&db).await?;
    factory::title::add_genre(&db, tagged.id, genre.id).await?;

    let page = TitleRepository::new(&db)
        .get_paginated(
            ResolvedTitleFilter {
                genre_id: Some(genre.id),
                ..Default::default()
            },
            first_page(),
        )
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].id, tagged.id);

    Ok(())
}

/// Tests combining name substring, year and category filters.
///
/// Expected: Ok with the single title matching all filters
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let category = factory::create_category(&db).await?;
    let matching = factory::title::TitleFactory::new(&db)
        .name("Stalker")
        .year(1979)
        .category_id(Some(category.id))
        .build()
        .await?;
    factory::title::TitleFactory::new(&db)
        .name("Stalker")
        .year(2007)
        .category_id(Some(category.id))
        .build()
        .await?;
    factory::title::TitleFactory::new(&db)
        .name("Stalker")
        .year(1979)
        .build()
        .await?;
    factory::title::TitleFactory::new(&db)
        .name("Solaris")
        .year(1979)
        .category_id(Some(category.id))
        .build()
        .await?;

    let page = TitleRepository::new(&db)
        .get_paginated(
            ResolvedTitleFilter {
                name: Some("alk".to_string()),
                year: Some(1979),
                category_id: Some(category.id),
                genre_id: None,
            },
            first_page(),
        )
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].id, matching.id);

    Ok(())
}

/// Tests that an empty filter returns every title in name order.
///
/// Expected: Ok with all titles sorted by name
#[tokio::test]
async fn returns_all_titles_by_name() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    for name in ["Ulysses", "Dune", "Kindred"] {
        factory::title::TitleFactory::new(&db).name(name).build().await?;
    }

    let page = TitleRepository::new(&db)
        .get_paginated(ResolvedTitleFilter::default(), first_page())
        .await?;

    let names: Vec<_> = page.items.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Dune", "Kindred", "Ulysses"]);

    Ok(())
}
