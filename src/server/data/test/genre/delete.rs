use super::*;

/// Tests that deleting a genre detaches it from titles without deleting them.
///
/// Expected: Ok with the genre and its links gone and the title kept
#[tokio::test]
async fn detaches_genre_from_titles() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let genre = factory::create_genre(&db).await?;
    let kept = factory::create_genre(&db).await?;
    let title = factory::create_title(&db).await?;
    factory::title::add_genre(&db, title.id, genre.id).await?;
    factory::title::add_genre(&db, title.id, kept.id).await?;

    GenreRepository::new(&db).delete(genre.id).await?;

    assert!(entity::prelude::Genre::find_by_id(genre.id)
        .one(&db)
        .await?
        .is_none());
    assert!(entity::prelude::Title::find_by_id(title.id)
        .one(&db)
        .await?
        .is_some());

    let links = entity::prelude::TitleGenre::find()
        .filter(entity::title_genre::Column::TitleId.eq(title.id))
        .all(&db)
        .await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].genre_id, kept.id);

    Ok(())
}
