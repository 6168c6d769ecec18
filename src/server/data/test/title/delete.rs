use super::*;

/// Tests that deleting a title removes its reviews, their comments and its genre links.
///
/// Expected: Ok with no dependent rows left and the genre itself kept
#[tokio::test]
async fn cascades_to_reviews_comments_and_genre_links() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (_author, title, review, _comment) =
        factory::helpers::create_comment_with_dependencies(&db).await?;
    let genre = factory::create_genre(&db).await?;
    factory::title::add_genre(&db, title.id, genre.id).await?;

    let repo = TitleRepository::new(&db);
    repo.delete(title.id).await?;

    assert!(!repo.exists(title.id).await?);
    assert!(entity::prelude::Review::find_by_id(review.id)
        .one(&db)
        .await?
        .is_none());
    let comments = entity::prelude::Comment::find()
        .filter(entity::comment::Column::ReviewId.eq(review.id))
        .count(&db)
        .await?;
    assert_eq!(comments, 0);
    assert_eq!(entity::prelude::TitleGenre::find().count(&db).await?, 0);
    assert!(entity::prelude::Genre::find_by_id(genre.id)
        .one(&db)
        .await?
        .is_some());

    Ok(())
}
