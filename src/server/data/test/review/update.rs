use super::*;

/// Tests a partial update changing only the score.
///
/// Expected: Ok with the new score and unchanged text
#[tokio::test]
async fn updates_score_only() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let (_author, _title, review) = factory::helpers::create_review_with_dependencies(&db).await?;

    let updated = ReviewRepository::new(&db)
        .update(
            review.id,
            UpdateReviewParams {
                text: None,
                score: Some(2),
            },
        )
        .await?;

    assert_eq!(updated.score, 2);
    assert_eq!(updated.text, review.text);

    Ok(())
}
