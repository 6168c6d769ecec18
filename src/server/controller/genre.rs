use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
        pagination::LimitOffsetPageDto,
    },
    server::{
        controller::{body::json_body, query::{search_term, CatalogListQuery}},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            genre::{CreateGenreParams, Genre, UpdateGenreParams},
            permission::{Capability, Permission},
        },
        service::genre::GenreService,
        state::AppState,
    },
};

/// Tag for grouping genre endpoints in OpenAPI documentation
pub static GENRE_TAG: &str = "genre";

const MANAGE_CATALOG: Permission = Permission::Capability(Capability::ManageCatalog);

/// List genres.
///
/// Returns genres ordered by name, optionally filtered by a substring of the
/// name or slug.
///
/// # Access Control
/// - Anonymous
#[utoipa::path(
    get,
    path = "/v1/genres/",
    tag = GENRE_TAG,
    params(CatalogListQuery),
    responses(
        (status = 200, description = "Page of genres", body = LimitOffsetPageDto<GenreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genres(
    State(state): State<AppState>,
    Query(query): Query<CatalogListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = GenreService::new(&state.db);

    let page = service
        .get_paginated(search_term(&query.search), query.page(state.page_size()))
        .await?;

    Ok(Json(page.into_dto(Genre::into_dto)))
}

/// Create a genre.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
///
/// # Returns
/// - `201 Created` - The created genre
/// - `400 Bad Request` - Invalid name or slug, or slug already in use
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    post,
    path = "/v1/genres/",
    tag = GENRE_TAG,
    request_body = CreateGenreDto,
    responses(
        (status = 201, description = "Genre created", body = GenreDto),
        (status = 400, description = "Invalid genre data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_genre(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateGenreDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;
    let payload = json_body(payload)?;

    let service = GenreService::new(&state.db);

    let genre = service
        .create(CreateGenreParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(genre.into_dto())))
}

/// Get a genre by slug.
#[utoipa::path(
    get,
    path = "/v1/genres/{slug}/",
    tag = GENRE_TAG,
    params(("slug" = String, Path, description = "Genre slug")),
    responses(
        (status = 200, description = "The genre", body = GenreDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let genre = GenreService::new(&state.db).get_by_slug(&slug).await?;

    Ok(Json(genre.into_dto()))
}

/// Partially update a genre.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    patch,
    path = "/v1/genres/{slug}/",
    tag = GENRE_TAG,
    params(("slug" = String, Path, description = "Genre slug")),
    request_body = UpdateGenreDto,
    responses(
        (status = 200, description = "Genre updated", body = GenreDto),
        (status = 400, description = "Invalid genre data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_genre(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    payload: Result<Json<UpdateGenreDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;
    let payload = json_body(payload)?;

    let genre = GenreService::new(&state.db)
        .update(&slug, UpdateGenreParams::from_dto(payload))
        .await?;

    Ok(Json(genre.into_dto()))
}

/// Delete a genre.
///
/// Titles tagged with the genre are kept without it.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    delete,
    path = "/v1/genres/{slug}/",
    tag = GENRE_TAG,
    params(("slug" = String, Path, description = "Genre slug")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;

    GenreService::new(&state.db).delete(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
