use super::*;

/// Tests resolving a mix of known and unknown slugs.
///
/// Expected: Ok with only the known genres
#[tokio::test]
async fn skips_unknown_slugs() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let drama = factory::genre::GenreFactory::new(&db)
        .slug("drama")
        .build()
        .await?;
    let comedy = factory::genre::GenreFactory::new(&db)
        .slug("comedy")
        .build()
        .await?;
    factory::genre::GenreFactory::new(&db)
        .slug("horror")
        .build()
        .await?;

    let slugs = vec![
        "drama".to_string(),
        "comedy".to_string(),
        "western".to_string(),
    ];
    let mut ids: Vec<_> = GenreRepository::new(&db)
        .find_by_slugs(&slugs)
        .await?
        .into_iter()
        .map(|g| g.id)
        .collect();
    ids.sort();

    let mut expected = vec![drama.id, comedy.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests resolving an empty slug list.
///
/// Expected: Ok with no genres
#[tokio::test]
async fn empty_list_finds_nothing() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    factory::create_genre(&db).await?;

    let genres = GenreRepository::new(&db).find_by_slugs(&[]).await?;

    assert!(genres.is_empty());

    Ok(())
}
