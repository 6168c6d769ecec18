//! JSON request bodies.
//!
//! Write handlers take `Result<Json<T>, JsonRejection>` so the `AuthGuard` runs before
//! the body is looked at, then unwrap it with [`json_body`]. Bodies that are not JSON or
//! do not fit the DTO become a 400 field map like any other validation failure.

use std::{error::Error, sync::LazyLock};

use axum::{extract::rejection::JsonRejection, Json};
use regex::Regex;

use crate::server::error::validation::{ValidationError, NON_FIELD_ERRORS};

static MISSING_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"missing field `([^`]+)`").expect("missing field pattern compiles")
});
/// `<path>: <message> at line L column C`, where the path starts with the top-level field.
static FIELD_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_]\w*)[^:\s]*: (.+?)(?: at line \d+ column \d+)?$")
        .expect("field error pattern compiles")
});
static POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" at line \d+ column \d+$").expect("position pattern compiles"));

/// Unwraps an extracted JSON body or reports why it could not be read.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(rejection_error(&rejection)),
    }
}

fn rejection_error(rejection: &JsonRejection) -> ValidationError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let detail = err
                .source()
                .map(ToString::to_string)
                .unwrap_or_else(|| err.body_text());
            data_error(&detail)
        }
        JsonRejection::JsonSyntaxError(_) => {
            ValidationError::field(NON_FIELD_ERRORS, "Malformed JSON body.")
        }
        JsonRejection::MissingJsonContentType(_) => ValidationError::field(
            NON_FIELD_ERRORS,
            "Expected request with `Content-Type: application/json`.",
        ),
        other => ValidationError::field(NON_FIELD_ERRORS, other.body_text()),
    }
}

/// Maps a deserialization message to the field it concerns.
fn data_error(detail: &str) -> ValidationError {
    if let Some(captures) = MISSING_FIELD.captures(detail) {
        return ValidationError::field(&captures[1], "This field is required.");
    }
    if let Some(captures) = FIELD_ERROR.captures(detail) {
        return ValidationError::field(&captures[1], &captures[2]);
    }

    ValidationError::field(NON_FIELD_ERRORS, POSITION.replace(detail, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_field_by_name() {
        let err = data_error("missing field `username` at line 1 column 28");

        assert_eq!(err.messages("username"), ["This field is required."]);
    }

    #[test]
    fn reports_wrong_type_under_its_field() {
        let err =
            data_error("score: invalid type: string \"ten\", expected i32 at line 1 column 17");

        assert_eq!(
            err.messages("score"),
            ["invalid type: string \"ten\", expected i32"]
        );
    }

    #[test]
    fn reports_nested_path_under_top_level_field() {
        let err = data_error(
            "genre[1]: invalid type: integer `3`, expected a string at line 1 column 30",
        );

        assert!(err.has_field("genre"));
    }

    #[test]
    fn falls_back_to_non_field_errors() {
        let err =
            data_error("invalid type: sequence, expected struct SignupDto at line 1 column 0");

        assert_eq!(
            err.messages(NON_FIELD_ERRORS),
            ["invalid type: sequence, expected struct SignupDto"]
        );
    }
}
