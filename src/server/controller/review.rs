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
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        controller::{body::json_body, query::PageQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            permission::{Capability, Permission},
            review::{CreateReviewParams, Review, UpdateReviewParams},
        },
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// List reviews of a title, newest first.
///
/// # Access Control
/// - Anonymous
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/review/",
    tag = REVIEW_TAG,
    params(("title_id" = i32, Path, description = "Title id"), PageQuery),
    responses(
        (status = 200, description = "Page of reviews", body = NumberedPageDto<ReviewDto>),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(title_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_paginated(title_id, query.page(state.page_size()))
        .await?;

    Ok(Json(reviews.into_dto(Review::into_dto)))
}

/// Review a title.
///
/// Each user may review a title once.
///
/// # Access Control
/// - `CreateContent` - Any authenticated user
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Blank text, score outside 1..=10, or a second review of the title
/// - `401 Unauthorized` - Missing or invalid access token
/// - `404 Not Found` - Title not found
#[utoipa::path(
    post,
    path = "/v1/titles/{title_id}/review/",
    tag = REVIEW_TAG,
    params(("title_id" = i32, Path, description = "Title id")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Title not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(title_id): Path<i32>,
    payload: Result<Json<CreateReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Capability(Capability::CreateContent)])
        .await?;
    let payload = json_body(payload)?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParams::from_dto(title_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/review/{review_id}/",
    tag = REVIEW_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "The review", body = ReviewDto),
        (status = 404, description = "Review not found for this title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let review = ReviewService::new(&state.db)
        .get(title_id, review_id)
        .await?;

    Ok(Json(review.into_dto()))
}

/// Partially update a review.
///
/// # Access Control
/// - The review's author, moderators and admins
#[utoipa::path(
    patch,
    path = "/v1/titles/{title_id}/review/{review_id}/",
    tag = REVIEW_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author or a moderator", body = ErrorDto),
        (status = 404, description = "Review not found for this title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((title_id, review_id)): Path<(i32, i32)>,
    payload: Result<Json<UpdateReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let payload = json_body(payload)?;

    let review = ReviewService::new(&state.db)
        .update(&user, title_id, review_id, UpdateReviewParams::from_dto(payload))
        .await?;

    Ok(Json(review.into_dto()))
}

/// Delete a review and its comments.
///
/// # Access Control
/// - The review's author, moderators and admins
#[utoipa::path(
    delete,
    path = "/v1/titles/{title_id}/review/{review_id}/",
    tag = REVIEW_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author or a moderator", body = ErrorDto),
        (status = 404, description = "Review not found for this title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((title_id, review_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ReviewService::new(&state.db)
        .delete(&user, title_id, review_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
