use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{SignupDto, TokenDto, TokenRequestDto},
    },
    server::{
        controller::body::json_body, error::AppError, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register and request a confirmation code.
///
/// Creates the user when the username and email are free, then mails a confirmation
/// code to the given address. Repeating the request with the same username and email
/// mails a new code without creating anything. Mail delivery failures do not fail
/// the request.
///
/// # Access Control
/// - Anonymous
///
/// # Returns
/// - `200 OK` - Echo of the submitted username and email
/// - `400 Bad Request` - Invalid, reserved or already taken username / email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/auth/signup/",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "User registered, confirmation code sent", body = SignupDto),
        (status = 400, description = "Invalid signup data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let service = AuthService::new(&state.db, &state.codes, &state.tokens, &state.mailer);

    let user = service.signup(payload.username, payload.email).await?;

    Ok(Json(SignupDto {
        email: user.email,
        username: user.username,
    }))
}

/// Exchange a confirmation code for an access token.
///
/// # Access Control
/// - Anonymous
///
/// # Returns
/// - `200 OK` - Bearer access token
/// - `400 Bad Request` - Blank fields or wrong confirmation code
/// - `404 Not Found` - Unknown username
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/v1/auth/token/",
    tag = AUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Access token issued", body = TokenDto),
        (status = 400, description = "Invalid confirmation code", body = ValidationErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let service = AuthService::new(&state.db, &state.codes, &state.tokens, &state.mailer);

    let token = service
        .issue_token(&payload.username, &payload.confirmation_code)
        .await?;

    Ok(Json(TokenDto { token }))
}
