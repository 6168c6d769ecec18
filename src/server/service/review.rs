//! Review service.
//!
//! Enforces one review per author and title, the score range, and author-or-moderator
//! rights on edits. Reviews are resolved under their title so a review id from another
//! title is reported as not found.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{review::ReviewRepository, title::TitleRepository},
    error::{
        is_unique_violation,
        validation::{ValidationError, NON_FIELD_ERRORS},
        AppError,
    },
    model::{
        pagination::{NumberedPage, PageNumber},
        permission::{self, Permission},
        review::{CreateReviewParams, Review, UpdateReviewParams},
        user::User,
    },
    util::validate,
};

const DUPLICATE_REVIEW: &str = "You have already reviewed this title.";

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets reviews of a title, newest first.
    pub async fn get_paginated(
        &self,
        title_id: i32,
        page: PageNumber,
    ) -> Result<NumberedPage<Review>, AppError> {
        self.ensure_title(title_id).await?;

        Ok(ReviewRepository::new(self.db)
            .get_paginated_by_title(title_id, page)
            .await?)
    }

    pub async fn get(&self, title_id: i32, review_id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .find_in_title(title_id, review_id)
            .await?
            .ok_or_else(|| not_found(title_id, review_id))
    }

    /// Creates a review by `params.author_id`.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::NotFound)` - The title does not exist
    /// - `Err(AppError::ValidationErr)` - Invalid text or score, or the author already
    ///   reviewed this title
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        self.ensure_title(params.title_id).await?;
        let repo = ReviewRepository::new(self.db);

        let mut errors = ValidationError::new();
        validate::collect(&mut errors, validate::text(&params.text));
        validate::collect(&mut errors, validate::score(params.score));
        if repo
            .exists_for_author(params.title_id, params.author_id)
            .await?
        {
            errors.add(NON_FIELD_ERRORS, DUPLICATE_REVIEW);
        }
        errors.into_result()?;

        match repo.create(params).await {
            Ok(review) => Ok(review),
            Err(e) if is_unique_violation(&e) => {
                Err(ValidationError::field(NON_FIELD_ERRORS, DUPLICATE_REVIEW).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Updates a review if `user` wrote it or may moderate content.
    pub async fn update(
        &self,
        user: &User,
        title_id: i32,
        review_id: i32,
        params: UpdateReviewParams,
    ) -> Result<Review, AppError> {
        let review = self.get(title_id, review_id).await?;
        permission::authorize(
            user,
            Permission::ModifyContent {
                author_id: review.author_id,
            },
        )?;

        let mut errors = ValidationError::new();
        if let Some(text) = &params.text {
            validate::collect(&mut errors, validate::text(text));
        }
        if let Some(score) = params.score {
            validate::collect(&mut errors, validate::score(score));
        }
        errors.into_result()?;

        Ok(ReviewRepository::new(self.db)
            .update(review.id, params)
            .await?)
    }

    /// Deletes a review and its comments if `user` wrote it or may moderate content.
    pub async fn delete(&self, user: &User, title_id: i32, review_id: i32) -> Result<(), AppError> {
        let review = self.get(title_id, review_id).await?;
        permission::authorize(
            user,
            Permission::ModifyContent {
                author_id: review.author_id,
            },
        )?;

        ReviewRepository::new(self.db).delete(review.id).await?;
        tracing::info!("User {} deleted review {}", user.id, review.id);

        Ok(())
    }

    async fn ensure_title(&self, title_id: i32) -> Result<(), AppError> {
        if TitleRepository::new(self.db).exists(title_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Title {} not found", title_id)))
        }
    }
}

fn not_found(title_id: i32, review_id: i32) -> AppError {
    AppError::NotFound(format!(
        "Review {} not found for title {}",
        review_id, title_id
    ))
}
