use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pagination::LimitOffsetPageDto,
        title::{CreateTitleDto, TitleDto, UpdateTitleDto},
    },
    server::{
        controller::{body::json_body, query::{limit_offset, search_term}},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            permission::{Capability, Permission},
            title::{CreateTitleParams, Title, TitleFilter, UpdateTitleParams},
        },
        service::title::TitleService,
        state::AppState,
    },
};

/// Tag for grouping title endpoints in OpenAPI documentation
pub static TITLE_TAG: &str = "title";

const MANAGE_CATALOG: Permission = Permission::Capability(Capability::ManageCatalog);

/// Filters and pagination for the title list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleListQuery {
    /// Substring of the title name.
    pub name: Option<String>,
    pub year: Option<i32>,
    /// Genre slug.
    pub genre: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// List titles.
///
/// Returns titles ordered by name with their category, genres and average review
/// score. All supplied filters must match; an unknown genre or category slug
/// matches nothing.
///
/// # Access Control
/// - Anonymous
#[utoipa::path(
    get,
    path = "/v1/titles/",
    tag = TITLE_TAG,
    params(TitleListQuery),
    responses(
        (status = 200, description = "Page of titles", body = LimitOffsetPageDto<TitleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_titles(
    State(state): State<AppState>,
    Query(query): Query<TitleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = TitleFilter {
        name: search_term(&query.name).map(str::to_string),
        year: query.year,
        genre: search_term(&query.genre).map(str::to_string),
        category: search_term(&query.category).map(str::to_string),
    };
    let page = limit_offset(query.limit, query.offset, state.page_size());

    let titles = TitleService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok(Json(titles.into_dto(Title::into_dto)))
}

/// Create a title.
///
/// `category` is a category slug and `genre` a list of genre slugs.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
///
/// # Returns
/// - `201 Created` - The created title
/// - `400 Bad Request` - Invalid name or a year in the future
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Unknown category or genre slug
#[utoipa::path(
    post,
    path = "/v1/titles/",
    tag = TITLE_TAG,
    request_body = CreateTitleDto,
    responses(
        (status = 201, description = "Title created", body = TitleDto),
        (status = 400, description = "Invalid title data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Unknown category or genre", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTitleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;
    let payload = json_body(payload)?;

    let title = TitleService::new(&state.db)
        .create(CreateTitleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(title.into_dto())))
}

/// Get a title by id.
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/",
    tag = TITLE_TAG,
    params(("title_id" = i32, Path, description = "Title id")),
    responses(
        (status = 200, description = "The title", body = TitleDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_title(
    State(state): State<AppState>,
    Path(title_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let title = TitleService::new(&state.db).get_by_id(title_id).await?;

    Ok(Json(title.into_dto()))
}

/// Partially update a title.
///
/// A supplied `genre` list replaces the title's genres.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    patch,
    path = "/v1/titles/{title_id}/",
    tag = TITLE_TAG,
    params(("title_id" = i32, Path, description = "Title id")),
    request_body = UpdateTitleDto,
    responses(
        (status = 200, description = "Title updated", body = TitleDto),
        (status = 400, description = "Invalid title data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Title, category or genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(title_id): Path<i32>,
    payload: Result<Json<UpdateTitleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;
    let payload = json_body(payload)?;

    let title = TitleService::new(&state.db)
        .update(title_id, UpdateTitleParams::from_dto(payload))
        .await?;

    Ok(Json(title.into_dto()))
}

/// Delete a title together with its reviews and their comments.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    delete,
    path = "/v1/titles/{title_id}/",
    tag = TITLE_TAG,
    params(("title_id" = i32, Path, description = "Title id")),
    responses(
        (status = 204, description = "Title deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_title(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(title_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;

    TitleService::new(&state.db).delete(title_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
