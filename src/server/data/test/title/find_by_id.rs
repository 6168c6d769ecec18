use super::*;

/// Tests that the rating is the mean of review scores.
///
/// Expected: Ok(Some) with rating 9.0 for scores 8 and 10
#[tokio::test]
async fn computes_rating_from_reviews() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let title = factory::create_title(&db).await?;
    for score in [8, 10] {
        let author = factory::create_user(&db).await?;
        factory::review::ReviewFactory::new(&db, title.id, author.id)
            .score(score)
            .build()
            .await?;
    }

    let found = TitleRepository::new(&db).find_by_id(title.id).await?.unwrap();

    assert_eq!(found.rating, Some(9.0));

    Ok(())
}

/// Tests finding a title that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_title() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db().await.unwrap();

    let found = TitleRepository::new(&db).find_by_id(404).await?;

    assert!(found.is_none());

    Ok(())
}
