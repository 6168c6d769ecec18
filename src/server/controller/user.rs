use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pagination::NumberedPageDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{body::json_body, query::{search_term, UserListQuery}},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            permission::{Capability, Permission},
            user::{CreateUserParams, UpdateUserParams, User},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

const MANAGE_USERS: Permission = Permission::Capability(Capability::ManageUsers);

/// List users.
///
/// Returns users ordered by username, optionally filtered by a username substring.
///
/// # Access Control
/// - `ManageUsers` - Admins only
#[utoipa::path(
    get,
    path = "/v1/users/",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users", body = NumberedPageDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_USERS])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(search_term(&query.search), query.page(state.page_size()))
        .await?;

    Ok(Json(users.into_dto(User::into_dto)))
}

/// Create a user.
///
/// Unlike signup, no confirmation code is mailed; the user requests one through
/// `/v1/auth/signup/` with the same username and email.
///
/// # Access Control
/// - `ManageUsers` - Admins only
#[utoipa::path(
    post,
    path = "/v1/users/",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_USERS])
        .await?;
    let payload = json_body(payload)?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a user by username.
///
/// # Access Control
/// - `ManageUsers` - Admins only
#[utoipa::path(
    get,
    path = "/v1/users/{username}/",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_USERS])
        .await?;

    let user = UserService::new(&state.db)
        .get_by_username(&username)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Partially update a user, including their role.
///
/// # Access Control
/// - `ManageUsers` - Admins only
#[utoipa::path(
    patch,
    path = "/v1/users/{username}/",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Username")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_USERS])
        .await?;
    let payload = json_body(payload)?;

    let service = UserService::new(&state.db);
    let user = service.get_by_username(&username).await?;

    let user = service
        .update(&user, UpdateUserParams::from_dto(payload))
        .await?;

    Ok(Json(user.into_dto()))
}

/// Get the requesting user's own record.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/v1/users/me/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The requesting user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok(Json(user.into_dto()))
}

/// Partially update the requesting user's own record.
///
/// `role` is ignored.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    patch,
    path = "/v1/users/me/",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let payload = json_body(payload)?;

    let user = UserService::new(&state.db)
        .update(&user, UpdateUserParams::from_self_dto(payload))
        .await?;

    Ok(Json(user.into_dto()))
}
