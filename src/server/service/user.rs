//! User service for business logic.
//!
//! This module provides the `UserService` used by the admin user endpoints and the
//! `/v1/users/me/` endpoints. It validates usernames and emails, including their
//! uniqueness, before anything reaches the repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{is_unique_violation, validation::ValidationError, AppError},
    model::{
        pagination::{NumberedPage, PageNumber},
        user::{CreateUserParams, UpdateUserParams, User},
    },
    util::validate,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets users ordered by username, optionally filtered by a username substring.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageNumber,
    ) -> Result<NumberedPage<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_paginated(search, page)
            .await?)
    }

    /// Retrieves a user by username.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }

    /// Creates a user on behalf of an admin.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        self.validate_identity(Some(&params.username), Some(&params.email), None)
            .await?;

        let user = UserRepository::new(self.db)
            .create(params)
            .await
            .map_err(identity_taken)?;
        tracing::info!("Created user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Applies a partial update to `user`.
    ///
    /// Callers decide whether the role may change by building `params` with
    /// `UpdateUserParams::from_dto` or `UpdateUserParams::from_self_dto`.
    pub async fn update(&self, user: &User, params: UpdateUserParams) -> Result<User, AppError> {
        let username = params
            .username
            .as_deref()
            .filter(|username| *username != user.username);
        let email = params.email.as_deref().filter(|email| *email != user.email);
        self.validate_identity(username, email, Some(user.id)).await?;

        UserRepository::new(self.db)
            .update(user.id, params)
            .await
            .map_err(identity_taken)
    }

    /// Validates the format and uniqueness of a new username and/or email.
    ///
    /// # Arguments
    /// - `username` - Username to check, `None` to skip
    /// - `email` - Email to check, `None` to skip
    /// - `exclude_id` - User whose own current values do not count as taken
    async fn validate_identity(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let mut errors = ValidationError::new();

        if let Some(username) = username {
            validate::collect(&mut errors, validate::username(username));
            if !errors.has_field("username") {
                if let Some(existing) = repo.find_by_username(username).await? {
                    if Some(existing.id) != exclude_id {
                        errors.add("username", "A user with that username already exists.");
                    }
                }
            }
        }
        if let Some(email) = email {
            validate::collect(&mut errors, validate::email(email));
            if !errors.has_field("email") {
                if let Some(existing) = repo.find_by_email(email).await? {
                    if Some(existing.id) != exclude_id {
                        errors.add("email", "A user with that email already exists.");
                    }
                }
            }
        }

        Ok(errors.into_result()?)
    }
}

fn identity_taken(err: sea_orm::DbErr) -> AppError {
    if is_unique_violation(&err) {
        ValidationError::field("username", "A user with that username or email already exists.")
            .into()
    } else {
        err.into()
    }
}
