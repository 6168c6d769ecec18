//! Comment service.
//!
//! Every operation first resolves the parent review through the (title, review) pair;
//! a pair that does not match an existing review is reported as not found.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, review::ReviewRepository},
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParams},
        pagination::{NumberedPage, PageNumber},
        permission::{self, Permission},
        user::User,
    },
    util::validate,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        title_id: i32,
        review_id: i32,
        page: PageNumber,
    ) -> Result<NumberedPage<Comment>, AppError> {
        self.ensure_review(title_id, review_id).await?;

        Ok(CommentRepository::new(self.db)
            .get_paginated_by_review(review_id, page)
            .await?)
    }

    pub async fn get(
        &self,
        title_id: i32,
        review_id: i32,
        comment_id: i32,
    ) -> Result<Comment, AppError> {
        self.ensure_review(title_id, review_id).await?;

        CommentRepository::new(self.db)
            .find_in_review(review_id, comment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Comment {} not found for review {}",
                    comment_id, review_id
                ))
            })
    }

    /// Creates a comment on the review identified by `title_id` and `params.review_id`.
    pub async fn create(
        &self,
        title_id: i32,
        params: CreateCommentParams,
    ) -> Result<Comment, AppError> {
        self.ensure_review(title_id, params.review_id).await?;
        validate::text(&params.text)?;

        Ok(CommentRepository::new(self.db).create(params).await?)
    }

    /// Replaces the text of a comment if `user` wrote it or may moderate content.
    ///
    /// An update without text leaves the comment unchanged.
    pub async fn update(
        &self,
        user: &User,
        title_id: i32,
        review_id: i32,
        comment_id: i32,
        text: Option<String>,
    ) -> Result<Comment, AppError> {
        let comment = self.get(title_id, review_id, comment_id).await?;
        permission::authorize(
            user,
            Permission::ModifyContent {
                author_id: comment.author_id,
            },
        )?;

        let Some(text) = text else {
            return Ok(comment);
        };
        validate::text(&text)?;

        Ok(CommentRepository::new(self.db)
            .update(comment.id, text)
            .await?)
    }

    pub async fn delete(
        &self,
        user: &User,
        title_id: i32,
        review_id: i32,
        comment_id: i32,
    ) -> Result<(), AppError> {
        let comment = self.get(title_id, review_id, comment_id).await?;
        permission::authorize(
            user,
            Permission::ModifyContent {
                author_id: comment.author_id,
            },
        )?;

        CommentRepository::new(self.db).delete(comment.id).await?;

        Ok(())
    }

    async fn ensure_review(&self, title_id: i32, review_id: i32) -> Result<(), AppError> {
        match ReviewRepository::new(self.db)
            .find_in_title(title_id, review_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Review {} not found for title {}",
                review_id, title_id
            ))),
        }
    }
}

