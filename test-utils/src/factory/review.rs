//! Review factory for creating test review entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews.
///
/// Title and author are required since reviews cannot exist without them.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    title_id: i32,
    author_id: i32,
    text: String,
    score: i32,
    pub_date: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with score `5` published now.
    pub fn new(db: &'a DatabaseConnection, title_id: i32, author_id: i32) -> Self {
        Self {
            db,
            title_id,
            author_id,
            text: "Worth a look.".to_string(),
            score: 5,
            pub_date: Utc::now(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    pub fn pub_date(mut self, pub_date: DateTime<Utc>) -> Self {
        self.pub_date = pub_date;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            title_id: ActiveValue::Set(self.title_id),
            author_id: ActiveValue::Set(self.author_id),
            text: ActiveValue::Set(self.text),
            score: ActiveValue::Set(self.score),
            pub_date: ActiveValue::Set(self.pub_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default text and score.
pub async fn create_review(
    db: &DatabaseConnection,
    title_id: i32,
    author_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, title_id, author_id).build().await
}
