//! Field validation rules.
//!
//! Pure checks on a single value. Uniqueness rules need the database and live in
//! the services; they add to the same `ValidationError`.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use validator::ValidateEmail;

use crate::server::error::validation::ValidationError;

/// Username that would collide with the `/v1/users/me/` route.
pub const RESERVED_USERNAME: &str = "me";

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const NAME_MAX_LENGTH: usize = 256;
pub const SLUG_MAX_LENGTH: usize = 50;
pub const SCORE_MIN: i32 = 1;
pub const SCORE_MAX: i32 = 10;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern compiles"));
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern compiles"));

/// Checks the format of a username: not reserved, not empty, at most 150
/// characters of `[\w.@+-]`.
pub fn username(value: &str) -> Result<(), ValidationError> {
    let field = "username";

    if value.is_empty() {
        return Err(ValidationError::field(field, "This field may not be blank."));
    }
    if value == RESERVED_USERNAME {
        return Err(ValidationError::field(
            field,
            format!("Username '{}' is reserved.", RESERVED_USERNAME),
        ));
    }

    let mut err = ValidationError::new();
    if value.chars().count() > USERNAME_MAX_LENGTH {
        err.add(
            field,
            format!("Ensure this field has no more than {} characters.", USERNAME_MAX_LENGTH),
        );
    }
    if !USERNAME_PATTERN.is_match(value) {
        err.add(
            field,
            "Username may contain only letters, digits and the characters . @ + - _",
        );
    }
    err.into_result()
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    let field = "email";

    if value.is_empty() {
        return Err(ValidationError::field(field, "This field may not be blank."));
    }
    if value.chars().count() > EMAIL_MAX_LENGTH {
        return Err(ValidationError::field(
            field,
            format!("Ensure this field has no more than {} characters.", EMAIL_MAX_LENGTH),
        ));
    }
    if !value.validate_email() {
        return Err(ValidationError::field(field, "Enter a valid email address."));
    }
    Ok(())
}

/// Checks a display name (category, genre or title): not blank, at most 256 characters.
pub fn name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::field(field, "This field may not be blank."));
    }
    if value.chars().count() > NAME_MAX_LENGTH {
        return Err(ValidationError::field(
            field,
            format!("Ensure this field has no more than {} characters.", NAME_MAX_LENGTH),
        ));
    }
    Ok(())
}

pub fn slug(value: &str) -> Result<(), ValidationError> {
    let field = "slug";

    if value.is_empty() {
        return Err(ValidationError::field(field, "This field may not be blank."));
    }

    let mut err = ValidationError::new();
    if value.len() > SLUG_MAX_LENGTH {
        err.add(
            field,
            format!("Ensure this field has no more than {} characters.", SLUG_MAX_LENGTH),
        );
    }
    if !SLUG_PATTERN.is_match(value) {
        err.add(
            field,
            "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
        );
    }
    err.into_result()
}

/// Checks that `year` is not after `current_year`.
pub fn year_not_after(year: i32, current_year: i32) -> Result<(), ValidationError> {
    if year > current_year {
        return Err(ValidationError::field(
            "year",
            format!("Year {} is in the future.", year),
        ));
    }
    Ok(())
}

/// Checks that `year` is not after the current calendar year (UTC).
pub fn year(year: i32) -> Result<(), ValidationError> {
    year_not_after(year, Utc::now().year())
}

pub fn score(value: i32) -> Result<(), ValidationError> {
    if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(ValidationError::field(
            "score",
            format!("Score must be between {} and {}.", SCORE_MIN, SCORE_MAX),
        ));
    }
    Ok(())
}

/// Checks review / comment text.
pub fn text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::field("text", "This field may not be blank."));
    }
    Ok(())
}

/// Runs `check` and moves its messages into `errors`.
pub fn collect(errors: &mut ValidationError, check: Result<(), ValidationError>) {
    if let Err(err) = check {
        errors.merge(err);
    }
}
