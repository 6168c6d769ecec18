use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{SignupDto, TokenDto, TokenRequestDto},
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
        genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
        title::{CreateTitleDto, TitleDto, UpdateTitleDto},
        user::{CreateUserDto, RoleDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{auth, category, comment, genre, review, title, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "YaMDb API", description = "Reviews of books, films and music"),
    paths(
        auth::signup,
        auth::token,
        category::get_categories,
        category::create_category,
        category::get_category,
        category::update_category,
        category::delete_category,
        genre::get_genres,
        genre::create_genre,
        genre::get_genre,
        genre::update_genre,
        genre::delete_genre,
        title::get_titles,
        title::create_title,
        title::get_title,
        title::update_title,
        title::delete_title,
        review::get_reviews,
        review::create_review,
        review::get_review,
        review::update_review,
        review::delete_review,
        comment::get_comments,
        comment::create_comment,
        comment::get_comment,
        comment::update_comment,
        comment::delete_comment,
        user::get_users,
        user::create_user,
        user::get_me,
        user::update_me,
        user::get_user,
        user::update_user,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        SignupDto,
        TokenRequestDto,
        TokenDto,
        CategoryDto,
        CreateCategoryDto,
        UpdateCategoryDto,
        GenreDto,
        CreateGenreDto,
        UpdateGenreDto,
        TitleDto,
        CreateTitleDto,
        UpdateTitleDto,
        ReviewDto,
        CreateReviewDto,
        UpdateReviewDto,
        CommentDto,
        CreateCommentDto,
        UpdateCommentDto,
        RoleDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Signup and access tokens"),
        (name = "category", description = "Title categories"),
        (name = "genre", description = "Title genres"),
        (name = "title", description = "Reviewable works"),
        (name = "review", description = "Reviews of titles"),
        (name = "comment", description = "Comments on reviews"),
        (name = "user", description = "User accounts"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected paths.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/signup/", post(auth::signup))
        .route("/v1/auth/token/", post(auth::token))
        .route(
            "/v1/categories/",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/v1/categories/{slug}/",
            get(category::get_category)
                .patch(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/v1/genres/",
            get(genre::get_genres).post(genre::create_genre),
        )
        .route(
            "/v1/genres/{slug}/",
            get(genre::get_genre)
                .patch(genre::update_genre)
                .delete(genre::delete_genre),
        )
        .route(
            "/v1/titles/",
            get(title::get_titles).post(title::create_title),
        )
        .route(
            "/v1/titles/{title_id}/",
            get(title::get_title)
                .patch(title::update_title)
                .delete(title::delete_title),
        )
        .route(
            "/v1/titles/{title_id}/review/",
            get(review::get_reviews).post(review::create_review),
        )
        .route(
            "/v1/titles/{title_id}/review/{review_id}/",
            get(review::get_review)
                .patch(review::update_review)
                .delete(review::delete_review),
        )
        .route(
            "/v1/titles/{title_id}/review/{review_id}/comment/",
            get(comment::get_comments).post(comment::create_comment),
        )
        .route(
            "/v1/titles/{title_id}/review/{review_id}/comment/{comment_id}/",
            get(comment::get_comment)
                .patch(comment::update_comment)
                .delete(comment::delete_comment),
        )
        .route("/v1/users/", get(user::get_users).post(user::create_user))
        .route("/v1/users/me/", get(user::get_me).patch(user::update_me))
        .route(
            "/v1/users/{username}/",
            get(user::get_user).patch(user::update_user),
        )
        .route("/api/docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
