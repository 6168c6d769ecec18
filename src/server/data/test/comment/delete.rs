use super::*;

/// Tests deleting a comment.
///
/// Expected: Ok with the comment removed and its review kept
#[tokio::test]
async fn deletes_comment() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (_author, _title, review, comment) =
        factory::helpers::create_comment_with_dependencies(&db).await?;

    CommentRepository::new(&db).delete(comment.id).await?;

    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(&db)
        .await?
        .is_none());
    assert!(entity::prelude::Review::find_by_id(review.id)
        .one(&db)
        .await?
        .is_some());

    Ok(())
}
