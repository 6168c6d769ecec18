//! Domain & parameter models for review operations

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub title_id: i32,
    pub author_id: i32,
    /// Username of the author.
    pub author: String,
    pub text: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}

impl Review {
    /// Converts a review row and its author into the domain model.
    ///
    /// The author is missing only if the user row was removed between queries;
    /// the username is then reported as empty.
    pub fn from_entity(
        entity: entity::review::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title_id: entity.title_id,
            author_id: entity.author_id,
            author: author.map(|user| user.username).unwrap_or_default(),
            text: entity.text,
            score: entity.score,
            pub_date: entity.pub_date,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            text: self.text,
            author: self.author,
            score: self.score,
            pub_date: self.pub_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub title_id: i32,
    pub author_id: i32,
    pub text: String,
    pub score: i32,
}

impl CreateReviewParams {
    pub fn from_dto(title_id: i32, author_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            title_id,
            author_id,
            text: dto.text,
            score: dto.score,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub text: Option<String>,
    pub score: Option<i32>,
}

impl UpdateReviewParams {
    pub fn from_dto(dto: UpdateReviewDto) -> Self {
        Self {
            text: dto.text,
            score: dto.score,
        }
    }
}
