//! Comment factory for creating test comment entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments on an existing review.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    review_id: i32,
    author_id: i32,
    text: String,
    pub_date: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, review_id: i32, author_id: i32) -> Self {
        Self {
            db,
            review_id,
            author_id,
            text: "Agreed.".to_string(),
            pub_date: Utc::now(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn pub_date(mut self, pub_date: DateTime<Utc>) -> Self {
        self.pub_date = pub_date;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            review_id: ActiveValue::Set(self.review_id),
            author_id: ActiveValue::Set(self.author_id),
            text: ActiveValue::Set(self.text),
            pub_date: ActiveValue::Set(self.pub_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default text.
pub async fn create_comment(
    db: &DatabaseConnection,
    review_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, review_id, author_id).build().await
}
