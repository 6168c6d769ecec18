use super::*;

/// Tests that updating replaces the genre set.
///
/// Expected: Ok with only the new genre attached
#[tokio::test]
async fn replaces_genres() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let old_genre = factory::create_genre(&db).await?;
    let new_genre = factory::create_genre(&db).await?;
    let repo = TitleRepository::new(&db);
    let title = repo
        .create(record("Roadside Picnic", None, vec![old_genre.id]))
        .await?;

    let updated = repo
        .update(title.id, record("Roadside Picnic", None, vec![new_genre.id]))
        .await?;

    let ids: Vec<_> = updated.genres.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![new_genre.id]);

    let links = entity::prelude::TitleGenre::find()
        .filter(entity::title_genre::Column::TitleId.eq(title.id))
        .all(&db)
        .await?;
    let linked: Vec<_> = links.iter().map(|link| link.genre_id).collect();
    assert_eq!(linked, vec![new_genre.id]);

    Ok(())
}

/// Tests updating a title that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_title() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();

    let result = TitleRepository::new(&db)
        .update(404, record("Ghost", None, Vec::new()))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
