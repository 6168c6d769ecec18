use super::*;

/// Tests that deleting a review removes its comments.
///
/// Expected: Ok with neither the review nor its comments left
#[tokio::test]
async fn deletes_review_and_comments() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (_author, _title, review, _comment) =
        factory::helpers::create_comment_with_dependencies(&db).await?;

    ReviewRepository::new(&db).delete(review.id).await?;

    assert!(entity::prelude::Review::find_by_id(review.id)
        .one(&db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Comment::find().count(&db).await?, 0);

    Ok(())
}
