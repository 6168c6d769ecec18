use crate::server::{
    data::comment::CommentRepository,
    model::{comment::CreateCommentParams, pagination::PageNumber},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_in_review;
mod get_paginated_by_review;
