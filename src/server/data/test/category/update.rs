use super::*;

/// Tests a partial update changing only the name.
///
/// Expected: Ok with the new name and the original slug
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let category = factory::category::CategoryFactory::new(&db)
        .name("Films")
        .slug("films")
        .build()
        .await?;

    let updated = CategoryRepository::new(&db)
        .update(
            category.id,
            UpdateCategoryParams {
                name: Some("Movies".to_string()),
                slug: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Movies");
    assert_eq!(updated.slug, "films");

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();

    let result = CategoryRepository::new(&db)
        .update(404, UpdateCategoryParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
