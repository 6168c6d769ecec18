use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        pagination::LimitOffsetPageDto,
    },
    server::{
        controller::{body::json_body, query::{search_term, CatalogListQuery}},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            category::{Category, CreateCategoryParams, UpdateCategoryParams},
            permission::{Capability, Permission},
        },
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

const MANAGE_CATALOG: Permission = Permission::Capability(Capability::ManageCatalog);

/// List categories.
///
/// Returns categories ordered by name, optionally filtered by a substring of the
/// name or slug.
///
/// # Access Control
/// - Anonymous
#[utoipa::path(
    get,
    path = "/v1/categories/",
    tag = CATEGORY_TAG,
    params(CatalogListQuery),
    responses(
        (status = 200, description = "Page of categories", body = LimitOffsetPageDto<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    Query(query): Query<CatalogListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let page = service
        .get_paginated(search_term(&query.search), query.page(state.page_size()))
        .await?;

    Ok(Json(page.into_dto(Category::into_dto)))
}

/// Create a category.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
///
/// # Returns
/// - `201 Created` - The created category
/// - `400 Bad Request` - Invalid name or slug, or slug already in use
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    post,
    path = "/v1/categories/",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;
    let payload = json_body(payload)?;

    let service = CategoryService::new(&state.db);

    let category = service
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Get a category by slug.
#[utoipa::path(
    get,
    path = "/v1/categories/{slug}/",
    tag = CATEGORY_TAG,
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_slug(&slug).await?;

    Ok(Json(category.into_dto()))
}

/// Partially update a category.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    patch,
    path = "/v1/categories/{slug}/",
    tag = CATEGORY_TAG,
    params(("slug" = String, Path, description = "Category slug")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    payload: Result<Json<UpdateCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;
    let payload = json_body(payload)?;

    let category = CategoryService::new(&state.db)
        .update(&slug, UpdateCategoryParams::from_dto(payload))
        .await?;

    Ok(Json(category.into_dto()))
}

/// Delete a category.
///
/// Titles in the category are kept and lose their category.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    delete,
    path = "/v1/categories/{slug}/",
    tag = CATEGORY_TAG,
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[MANAGE_CATALOG])
        .await?;

    CategoryService::new(&state.db).delete(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
