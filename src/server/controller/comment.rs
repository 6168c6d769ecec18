use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
        pagination::NumberedPageDto,
    },
    server::{
        controller::{body::json_body, query::PageQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            comment::{Comment, CreateCommentParams},
            permission::{Capability, Permission},
        },
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List comments on a review, oldest first.
///
/// # Access Control
/// - Anonymous
#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/review/{review_id}/comment/",
    tag = COMMENT_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page of comments", body = NumberedPageDto<CommentDto>),
        (status = 404, description = "Review not found for this title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path((title_id, review_id)): Path<(i32, i32)>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_paginated(title_id, review_id, query.page(state.page_size()))
        .await?;

    Ok(Json(comments.into_dto(Comment::into_dto)))
}

/// Comment on a review.
///
/// # Access Control
/// - `CreateContent` - Any authenticated user
#[utoipa::path(
    post,
    path = "/v1/titles/{title_id}/review/{review_id}/comment/",
    tag = COMMENT_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Blank text", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Review not found for this title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((title_id, review_id)): Path<(i32, i32)>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Capability(Capability::CreateContent)])
        .await?;
    let payload = json_body(payload)?;

    let comment = CommentService::new(&state.db)
        .create(
            title_id,
            CreateCommentParams::from_dto(review_id, user.id, payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/v1/titles/{title_id}/review/{review_id}/comment/{comment_id}/",
    tag = COMMENT_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id"),
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "The comment", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path((title_id, review_id, comment_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .get(title_id, review_id, comment_id)
        .await?;

    Ok(Json(comment.into_dto()))
}

/// Edit a comment.
///
/// # Access Control
/// - The comment's author, moderators and admins
#[utoipa::path(
    patch,
    path = "/v1/titles/{title_id}/review/{review_id}/comment/{comment_id}/",
    tag = COMMENT_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id"),
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Blank text", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author or a moderator", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((title_id, review_id, comment_id)): Path<(i32, i32, i32)>,
    payload: Result<Json<UpdateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let payload = json_body(payload)?;

    let comment = CommentService::new(&state.db)
        .update(&user, title_id, review_id, comment_id, payload.text)
        .await?;

    Ok(Json(comment.into_dto()))
}

/// Delete a comment.
///
/// # Access Control
/// - The comment's author, moderators and admins
#[utoipa::path(
    delete,
    path = "/v1/titles/{title_id}/review/{review_id}/comment/{comment_id}/",
    tag = COMMENT_TAG,
    params(
        ("title_id" = i32, Path, description = "Title id"),
        ("review_id" = i32, Path, description = "Review id"),
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author or a moderator", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((title_id, review_id, comment_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    CommentService::new(&state.db)
        .delete(&user, title_id, review_id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
