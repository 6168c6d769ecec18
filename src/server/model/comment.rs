//! Domain & parameter models for comment operations

use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CreateCommentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub review_id: i32,
    pub author_id: i32,
    /// Username of the author.
    pub author: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            review_id: entity.review_id,
            author_id: entity.author_id,
            author: author.map(|user| user.username).unwrap_or_default(),
            text: entity.text,
            pub_date: entity.pub_date,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author: self.author,
            pub_date: self.pub_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub review_id: i32,
    pub author_id: i32,
    pub text: String,
}

impl CreateCommentParams {
    pub fn from_dto(review_id: i32, author_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            review_id,
            author_id,
            text: dto.text,
        }
    }
}
