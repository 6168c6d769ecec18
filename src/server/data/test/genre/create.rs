use super::*;

/// Tests creating a genre.
///
/// Expected: Ok with the genre persisted under its slug
#[tokio::test]
async fn creates_genre() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();

    let repo = GenreRepository::new(&db);
    let genre = repo
        .create(CreateGenreParams {
            name: "Drama".to_string(),
            slug: "drama".to_string(),
        })
        .await?;

    assert_eq!(genre.name, "Drama");
    assert_eq!(repo.find_by_slug("drama").await?, Some(genre));

    Ok(())
}

/// Tests creating a genre with a slug that is already used.
///
/// Expected: Err from the unique slug index
#[tokio::test]
async fn fails_for_duplicate_slug() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    factory::genre::GenreFactory::new(&db)
        .slug("drama")
        .build()
        .await?;

    let result = GenreRepository::new(&db)
        .create(CreateGenreParams {
            name: "Theatre".to_string(),
            slug: "drama".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
