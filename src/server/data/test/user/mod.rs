use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::PageNumber,
        user::{CreateUserParams, Role, UpdateUserParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_username_and_email;
mod get_paginated;
mod update;

async fn user_db() -> (test_utils::context::TestContext, sea_orm::DatabaseConnection) {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db().await.unwrap();
    (test, db)
}
