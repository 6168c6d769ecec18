use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::{
        permission::{Capability, Permission},
        user::{Role, User},
    },
    service::auth::jwt::AccessTokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn token_service() -> AccessTokenService {
    AccessTokenService::new("test-secret-key", Duration::minutes(5))
}

/// Builds request headers carrying a bearer token for `user`.
fn bearer_headers(tokens: &AccessTokenService, user: &entity::user::Model) -> HeaderMap {
    let token = tokens.issue(&User::from_entity(user.clone())).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn user_db() -> (test_utils::context::TestContext, DatabaseConnection) {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db().await.unwrap();
    (test, db)
}
