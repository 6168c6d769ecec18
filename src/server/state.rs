//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Configuration loaded from the environment
//! - Access token and confirmation code services keyed with the configured secret
//! - Mailer for confirmation letters

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{
        auth::{code::ConfirmationCodeService, jwt::AccessTokenService},
        mail::Mailer,
    },
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection is a pool handle, the
/// configuration sits behind an `Arc`, and the services share their keys.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    pub config: Arc<Config>,

    /// Signs and verifies bearer access tokens.
    pub tokens: AccessTokenService,

    /// Generates and verifies signup confirmation codes.
    pub codes: ConfirmationCodeService,

    pub mailer: Mailer,
}

impl AppState {
    /// Creates the application state, deriving the token services from `config`.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    /// - `mailer` - Mailer used for confirmation letters
    pub fn new(db: DatabaseConnection, config: Config, mailer: Mailer) -> Self {
        let tokens = AccessTokenService::new(&config.secret_key, config.access_token_lifetime);
        let codes =
            ConfirmationCodeService::new(&config.secret_key, config.confirmation_code_timeout);

        Self {
            db,
            config: Arc::new(config),
            tokens,
            codes,
            mailer,
        }
    }

    /// Page size used by every paginated list.
    pub fn page_size(&self) -> u64 {
        self.config.page_size
    }
}
