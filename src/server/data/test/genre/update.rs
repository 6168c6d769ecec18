use super::*;

/// Tests a partial update changing only the slug.
///
/// Expected: Ok with the new slug and the original name
#[tokio::test]
async fn updates_slug_only() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let genre = factory::genre::GenreFactory::new(&db)
        .name("Drama")
        .slug("drama")
        .build()
        .await?;

    let updated = GenreRepository::new(&db)
        .update(
            genre.id,
            UpdateGenreParams {
                name: None,
                slug: Some("dramas".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "Drama");
    assert_eq!(updated.slug, "dramas");

    Ok(())
}

/// Tests updating a genre that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_genre() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();

    let result = GenreRepository::new(&db)
        .update(404, UpdateGenreParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
