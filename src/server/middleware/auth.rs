//! Bearer token authentication guard.
//!
//! Controllers build an `AuthGuard` from the request headers and call `require` with
//! the permissions an operation needs. The guard resolves the bearer token to a user
//! and checks each permission against the user's tier.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        permission::{self, Permission},
        user::User,
    },
    service::auth::jwt::AccessTokenService,
};

const BEARER_PREFIX: &str = "bearer ";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a AccessTokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a AccessTokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user holding all permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token was sent
    /// - `Err(AuthError::InvalidToken)` - The token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - The token's user no longer exists
    /// - `Err(AuthError::AccessDenied)` - The user lacks one of the permissions
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token()?;
        let user_id = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            permission::authorize(&user, *permission)?;
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken);
        };
        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("non-ASCII authorization header".to_string()))?;

        if value.len() <= BEARER_PREFIX.len()
            || !value[..BEARER_PREFIX.len()].eq_ignore_ascii_case(BEARER_PREFIX)
        {
            return Err(AuthError::InvalidToken(
                "authorization header is not a bearer token".to_string(),
            ));
        }

        Ok(value[BEARER_PREFIX.len()..].trim())
    }
}
