use super::*;

/// Tests finding a review through its own title.
///
/// Expected: Ok(Some) with the review
#[tokio::test]
async fn finds_review_of_title() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (author, title, review) = factory::helpers::create_review_with_dependencies(&db).await?;

    let found = ReviewRepository::new(&db)
        .find_in_title(title.id, review.id)
        .await?
        .unwrap();

    assert_eq!(found.id, review.id);
    assert_eq!(found.author, author.username);

    Ok(())
}

/// Tests that a review is not reachable through another title.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_review_of_other_title() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (_author, _title, review) = factory::helpers::create_review_with_dependencies(&db).await?;
    let other = factory::create_title(&db).await?;

    let found = ReviewRepository::new(&db)
        .find_in_title(other.id, review.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
