use super::*;

/// Tests creating a title with a category and two genres.
///
/// Expected: Ok with category and genres loaded, genres sorted by name, no rating
#[tokio::test]
async fn creates_title_with_category_and_genres() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let category = factory::create_category(&db).await?;
    let drama = factory::genre::GenreFactory::new(&db)
        .name("Drama")
        .slug("drama")
        .build()
        .await?;
    let crime = factory::genre::GenreFactory::new(&db)
        .name("Crime")
        .slug("crime")
        .build()
        .await?;

    let title = TitleRepository::new(&db)
        .create(record(
            "The Godfather",
            Some(category.id),
            vec![drama.id, crime.id],
        ))
        .await?;

    assert_eq!(title.name, "The Godfather");
    assert_eq!(title.year, 1972);
    assert_eq!(title.category.map(|c| c.slug), Some(category.slug));
    let slugs: Vec<_> = title.genres.iter().map(|g| g.slug.as_str()).collect();
    assert_eq!(slugs, vec!["crime", "drama"]);
    assert_eq!(title.rating, None);

    Ok(())
}

/// Tests creating a title without a category or genres.
///
/// Expected: Ok with no category and an empty genre list
#[tokio::test]
async fn creates_bare_title() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();

    let title = TitleRepository::new(&db)
        .create(record("Untitled", None, Vec::new()))
        .await?;

    assert!(title.category.is_none());
    assert!(title.genres.is_empty());

    Ok(())
}
