//! Review data repository for database operations.
//!
//! Reviews are always addressed through their title: lookups take both the title id
//! and the review id so a review is never reachable under another title's path.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    pagination::{NumberedPage, PageNumber},
    review::{CreateReviewParams, Review, UpdateReviewParams},
};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review including the author's username
    /// - `Err(DbErr)` - Database error, including a unique violation when the author
    ///   already reviewed the title
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            title_id: ActiveValue::Set(params.title_id),
            author_id: ActiveValue::Set(params.author_id),
            text: ActiveValue::Set(params.text),
            score: ActiveValue::Set(params.score),
            pub_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(Review::from_entity(entity, author))
    }

    /// Finds a review by id, only if it belongs to the given title.
    pub async fn find_in_title(
        &self,
        title_id: i32,
        review_id: i32,
    ) -> Result<Option<Review>, DbErr> {
        let result = entity::prelude::Review::find_by_id(review_id)
            .filter(entity::review::Column::TitleId.eq(title_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(review, author)| Review::from_entity(review, author)))
    }

    /// Checks whether the author already reviewed the title.
    pub async fn exists_for_author(&self, title_id: i32, author_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::TitleId.eq(title_id))
            .filter(entity::review::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets reviews of a title, newest first.
    pub async fn get_paginated_by_title(
        &self,
        title_id: i32,
        page: PageNumber,
    ) -> Result<NumberedPage<Review>, DbErr> {
        let paginator = entity::prelude::Review::find()
            .filter(entity::review::Column::TitleId.eq(title_id))
            .order_by_desc(entity::review::Column::PubDate)
            .order_by_desc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, page.per_page.max(1));

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;
        let reviews = rows
            .into_iter()
            .map(|(review, author)| Review::from_entity(review, author))
            .collect();

        Ok(NumberedPage::new(reviews, total, page))
    }

    pub async fn update(&self, id: i32, params: UpdateReviewParams) -> Result<Review, DbErr> {
        let review = entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Review with id {} not found", id)))?;

        let mut active_model: entity::review::ActiveModel = review.into();
        if let Some(text) = params.text {
            active_model.text = ActiveValue::Set(text);
        }
        if let Some(score) = params.score {
            active_model.score = ActiveValue::Set(score);
        }

        let entity = active_model.update(self.db).await?;
        let author = entity::prelude::User::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(Review::from_entity(entity, author))
    }

    /// Deletes a review and its comments.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ReviewId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Review::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
