//! Title factory for creating test title entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test titles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let title = TitleFactory::new(&db)
///     .name("Solaris")
///     .year(1961)
///     .category_id(Some(category.id))
///     .build()
///     .await?;
/// ```
pub struct TitleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    year: i32,
    description: Option<String>,
    category_id: Option<i32>,
}

impl<'a> TitleFactory<'a> {
    /// Creates a new TitleFactory.
    ///
    /// Defaults:
    /// - name: `"Title {id}"`
    /// - year: `2000`
    /// - description / category: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Title {}", id),
            year: 2000,
            description: None,
            category_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub async fn build(self) -> Result<entity::title::Model, DbErr> {
        entity::title::ActiveModel {
            name: ActiveValue::Set(self.name),
            year: ActiveValue::Set(self.year),
            description: ActiveValue::Set(self.description),
            category_id: ActiveValue::Set(self.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a title with default values and no category.
pub async fn create_title(db: &DatabaseConnection) -> Result<entity::title::Model, DbErr> {
    TitleFactory::new(db).build().await
}

/// Attaches a genre to a title.
pub async fn add_genre(db: &DatabaseConnection, title_id: i32, genre_id: i32) -> Result<(), DbErr> {
    entity::prelude::TitleGenre::insert(entity::title_genre::ActiveModel {
        title_id: ActiveValue::Set(title_id),
        genre_id: ActiveValue::Set(genre_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
