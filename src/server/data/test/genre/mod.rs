use crate::server::{
    data::genre::GenreRepository,
    model::{
        genre::{CreateGenreParams, UpdateGenreParams},
        pagination::LimitOffset,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_slugs;
mod get_paginated;
mod update;

fn first_page() -> LimitOffset {
    LimitOffset {
        limit: 10,
        offset: 0,
    }
}
