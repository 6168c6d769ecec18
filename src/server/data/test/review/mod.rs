use crate::server::{
    data::review::ReviewRepository,
    error::is_unique_violation,
    model::{
        pagination::PageNumber,
        review::{CreateReviewParams, UpdateReviewParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_in_title;
mod get_paginated_by_title;
mod update;
