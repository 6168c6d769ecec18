//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    comment::{Comment, CreateCommentParams},
    pagination::{NumberedPage, PageNumber},
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            review_id: ActiveValue::Set(params.review_id),
            author_id: ActiveValue::Set(params.author_id),
            text: ActiveValue::Set(params.text),
            pub_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, author))
    }

    /// Finds a comment by id, only if it belongs to the given review.
    pub async fn find_in_review(
        &self,
        review_id: i32,
        comment_id: i32,
    ) -> Result<Option<Comment>, DbErr> {
        let result = entity::prelude::Comment::find_by_id(comment_id)
            .filter(entity::comment::Column::ReviewId.eq(review_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(comment, author)| Comment::from_entity(comment, author)))
    }

    /// Gets comments on a review, oldest first.
    pub async fn get_paginated_by_review(
        &self,
        review_id: i32,
        page: PageNumber,
    ) -> Result<NumberedPage<Comment>, DbErr> {
        let paginator = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ReviewId.eq(review_id))
            .order_by_asc(entity::comment::Column::PubDate)
            .order_by_asc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, page.per_page.max(1));

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;
        let comments = rows
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author))
            .collect();

        Ok(NumberedPage::new(comments, total, page))
    }

    /// Replaces the text of a comment.
    pub async fn update(&self, id: i32, text: String) -> Result<Comment, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Comment with id {} not found", id)))?;

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.text = ActiveValue::Set(text);

        let entity = active_model.update(self.db).await?;
        let author = entity::prelude::User::find_by_id(entity.author_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, author))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
