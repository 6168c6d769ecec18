use super::*;

/// Tests that deleting a category keeps its titles and clears their category.
///
/// Expected: Ok with the category gone and the title's category_id null
#[tokio::test]
async fn clears_category_of_titles() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db().await.unwrap();
    let category = factory::create_category(&db).await?;
    let title = factory::title::TitleFactory::new(&db)
        .category_id(Some(category.id))
        .build()
        .await?;

    CategoryRepository::new(&db).delete(category.id).await?;

    let deleted = entity::prelude::Category::find_by_id(category.id)
        .one(&db)
        .await?;
    assert!(deleted.is_none());

    let title = entity::prelude::Title::find_by_id(title.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(title.category_id, None);

    Ok(())
}
