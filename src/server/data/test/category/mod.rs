use crate::server::{
    data::category::CategoryRepository,
    model::{
        category::{CreateCategoryParams, UpdateCategoryParams},
        pagination::LimitOffset,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn first_page() -> LimitOffset {
    LimitOffset {
        limit: 10,
        offset: 0,
    }
}
