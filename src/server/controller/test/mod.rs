use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    model::user::User,
    router,
    service::mail::{Letter, Mailer},
    state::AppState,
};

mod comment;

/// Application wired to an in-memory database and an in-memory outbox.
struct TestApp {
    _test: TestContext,
    state: AppState,
    outbox: Arc<Mutex<Vec<Letter>>>,
}

impl TestApp {
    async fn new() -> Self {
        let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db().await.unwrap();
        let config = Config::for_tests();
        let (mailer, outbox) = Mailer::in_memory(&config.email.from_address);

        Self {
            _test: test,
            state: AppState::new(db, config, mailer),
            outbox,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        &self.state.db
    }

    fn router(&self) -> Router {
        router::router().with_state(self.state.clone())
    }

    /// Issues an access token for a user created by a factory.
    fn token_for(&self, user: &entity::user::Model) -> String {
        self.state
            .tokens
            .issue(&User::from_entity(user.clone()))
            .unwrap()
    }

    /// Sends a request and returns the status with the JSON body, `Null` when empty.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, token, Some(body)).await
    }

    async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }
}
