use super::*;

/// Tests creating a category.
///
/// Expected: Ok with the category persisted under its slug
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();

    let repo = CategoryRepository::new(&db);
    let category = repo
        .create(CreateCategoryParams {
            name: "Films".to_string(),
            slug: "films".to_string(),
        })
        .await?;

    assert_eq!(category.name, "Films");
    assert_eq!(category.slug, "films");

    let found = repo.find_by_slug("films").await?;
    assert_eq!(found, Some(category));

    Ok(())
}

/// Tests creating a category with a slug that is already used.
///
/// Expected: Err from the unique slug index
#[tokio::test]
async fn fails_for_duplicate_slug() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    factory::category::CategoryFactory::new(&db)
        .slug("films")
        .build()
        .await?;

    let result = CategoryRepository::new(&db)
        .create(CreateCategoryParams {
            name: "Movies".to_string(),
            slug: "films".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
