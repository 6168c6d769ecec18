use crate::server::{
    data::title::{ResolvedTitleFilter, TitleRepository},
    model::{pagination::LimitOffset, title::TitleRecord},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;
mod update;

fn first_page() -> LimitOffset {
    LimitOffset {
        limit: 10,
        offset: 0,
    }
}

fn record(name: &str, category_id: Option<i32>, genre_ids: Vec<i32>) -> TitleRecord {
    TitleRecord {
        name: name.to_string(),
        year: 1972,
        description: None,
        category_id,
        genre_ids,
    }
}
