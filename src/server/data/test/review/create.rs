use super::*;

/// Tests creating a review.
///
/// Expected: Ok with the author's username attached and the author recorded as reviewer
#[tokio::test]
async fn creates_review_with_author() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let author = factory::create_user(&db).await?;
    let title = factory::create_title(&db).await?;

    let repo = ReviewRepository::new(&db);
    let review = repo
        .create(CreateReviewParams {
            title_id: title.id,
            author_id: author.id,
            text: "A slow burn.".to_string(),
            score: 7,
        })
        .await?;

    assert_eq!(review.author, author.username);
    assert_eq!(review.score, 7);
    assert_eq!(review.title_id, title.id);
    assert!(repo.exists_for_author(title.id, author.id).await?);

    Ok(())
}

/// Tests inserting a second review for the same title and author.
///
/// Expected: Err that is recognized as a unique violation
#[tokio::test]
async fn rejects_second_review_for_same_pair() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (author, title, _review) = factory::helpers::create_review_with_dependencies(&db).await?;

    let result = ReviewRepository::new(&db)
        .create(CreateReviewParams {
            title_id: title.id,
            author_id: author.id,
            text: "Changed my mind.".to_string(),
            score: 2,
        })
        .await;

    let err = result.unwrap_err();
    assert!(is_unique_violation(&err));

    Ok(())
}

/// Tests that the same author may review different titles.
///
/// Expected: Ok for both reviews
#[tokio::test]
async fn allows_same_author_on_other_title() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (author, _title, _review) = factory::helpers::create_review_with_dependencies(&db).await?;
    let other = factory::create_title(&db).await?;

    let review = ReviewRepository::new(&db)
        .create(CreateReviewParams {
            title_id: other.id,
            author_id: author.id,
            text: "Also good.".to_string(),
            score: 8,
        })
        .await?;

    assert_eq!(review.title_id, other.id);

    Ok(())
}
