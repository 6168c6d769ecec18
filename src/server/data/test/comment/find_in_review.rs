use super::*;

/// Tests that a comment is only reachable through its own review.
///
/// Expected: Ok(Some) for its review, Ok(None) for another review
#[tokio::test]
async fn scopes_comment_to_review() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (author, title, review, comment) =
        factory::helpers::create_comment_with_dependencies(&db).await?;
    let other_reviewer = factory::create_user(&db).await?;
    let other_review = factory::create_review(&db, title.id, other_reviewer.id).await?;

    let repo = CommentRepository::new(&db);
    let found = repo.find_in_review(review.id, comment.id).await?.unwrap();
    let missing = repo.find_in_review(other_review.id, comment.id).await?;

    assert_eq!(found.author, author.username);
    assert!(missing.is_none());

    Ok(())
}
