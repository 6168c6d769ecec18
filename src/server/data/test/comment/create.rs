use super::*;

/// Tests creating a comment on a review.
///
/// Expected: Ok with the author's username attached
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (_author, _title, review) = factory::helpers::create_review_with_dependencies(&db).await?;
    let commenter = factory::create_user(&db).await?;

    let comment = CommentRepository::new(&db)
        .create(CreateCommentParams {
            review_id: review.id,
            author_id: commenter.id,
            text: "Agreed.".to_string(),
        })
        .await?;

    assert_eq!(comment.author, commenter.username);
    assert_eq!(comment.review_id, review.id);
    assert_eq!(comment.text, "Agreed.");

    Ok(())
}
