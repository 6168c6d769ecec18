//! Signup and access token issuance.
//!
//! Signup registers a user (or finds the one already registered with the same
//! username and email) and mails a confirmation code. The code is later exchanged
//! for a bearer access token.

pub mod code;
pub mod jwt;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{is_unique_violation, validation::ValidationError, AppError},
    model::user::{CreateUserParams, User},
    service::{
        auth::{code::ConfirmationCodeService, jwt::AccessTokenService},
        mail::{Letter, Mailer},
    },
    util::validate,
};

const CONFIRMATION_SUBJECT: &str = "YaMDb confirmation code";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    codes: &'a ConfirmationCodeService,
    tokens: &'a AccessTokenService,
    mailer: &'a Mailer,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        codes: &'a ConfirmationCodeService,
        tokens: &'a AccessTokenService,
        mailer: &'a Mailer,
    ) -> Self {
        Self {
            db,
            codes,
            tokens,
            mailer,
        }
    }

    /// Registers a user and mails them a confirmation code.
    ///
    /// Repeating a signup with the exact username and email of an existing user
    /// succeeds without creating anything and mails a fresh code. Delivery failures
    /// are logged and do not fail the signup.
    ///
    /// # Returns
    /// - `Ok(User)` - The new or already registered user
    /// - `Err(AppError::ValidationErr)` - Invalid or already taken username / email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn signup(&self, username: String, email: String) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let username = username.trim().to_string();
        let email = email.trim().to_string();

        if let Some(user) = repo.find_by_username_and_email(&username, &email).await? {
            self.send_confirmation_code(&user).await?;
            return Ok(user);
        }

        let mut errors = ValidationError::new();
        validate::collect(&mut errors, validate::username(&username));
        validate::collect(&mut errors, validate::email(&email));

        if !errors.has_field("username") && repo.find_by_username(&username).await?.is_some() {
            errors.add("username", "A user with that username already exists.");
        }
        if !errors.has_field("email") && repo.find_by_email(&email).await?.is_some() {
            errors.add("email", "A user with that email already exists.");
        }
        errors.into_result()?;

        let user = match repo.create(CreateUserParams::signup(username, email)).await {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => {
                return Err(ValidationError::field(
                    "username",
                    "A user with that username or email already exists.",
                )
                .into())
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Registered user {} ({})", user.username, user.id);
        self.send_confirmation_code(&user).await?;

        Ok(user)
    }

    /// Exchanges a confirmation code for an access token.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token
    /// - `Err(AppError::NotFound)` - No user with this username
    /// - `Err(AppError::ValidationErr)` - Blank fields or a code that does not match
    pub async fn issue_token(
        &self,
        username: &str,
        confirmation_code: &str,
    ) -> Result<String, AppError> {
        let mut errors = ValidationError::new();
        if username.trim().is_empty() {
            errors.add("username", "This field may not be blank.");
        }
        if confirmation_code.trim().is_empty() {
            errors.add("confirmation_code", "This field may not be blank.");
        }
        errors.into_result()?;

        let user = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username.trim())))?;

        if !self.codes.verify(&user, confirmation_code) {
            return Err(ValidationError::field(
                "confirmation_code",
                "Invalid confirmation code.",
            )
            .into());
        }

        Ok(self.tokens.issue(&user)?)
    }

    /// Generates a code for `user` and mails it, logging delivery failures.
    async fn send_confirmation_code(&self, user: &User) -> Result<(), AppError> {
        let code = self.codes.generate(user)?;
        let letter = Letter {
            to: user.email.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            body: format!(
                "Hello, {}!\n\nYour confirmation code: {}\n",
                user.username, code
            ),
        };

        if let Err(e) = self.mailer.send(letter).await {
            tracing::warn!(
                "Failed to send confirmation code to {}: {}",
                user.email,
                e
            );
        }

        Ok(())
    }
}
