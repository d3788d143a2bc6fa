// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, ReviewArticleCommand},
    dto::{ArticleDto, ArticleListItemDto, CursorPage},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::ArticleStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use crate::presentation::serializers::{ArticleUpdateWrite, ArticleWrite};
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ArticleListParams {
    /// Text matched against title and content.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub publisher: Option<i64>,
    #[serde(default)]
    pub author: Option<i64>,
    #[serde(default)]
    pub include_unapproved: bool,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    pub status: ArticleStatus,
    #[serde(default)]
    pub is_approved: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles, newest first.", body = crate::presentation::http::openapi::ArticleListResponse),
        (status = 400, description = "Invalid cursor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Unapproved articles requested without permission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<CursorPage<ArticleListItemDto>>> {
    let query = ListArticlesQuery {
        q: params.q,
        category_id: params.category,
        publisher_id: params.publisher,
        author_id: params.author,
        include_unapproved: params.include_unapproved,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .article_queries
        .list_articles(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with nested author, publisher and category.", body = ArticleDto),
        (status = 404, description = "Not found or not visible.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(actor.0.as_ref(), GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleWrite,
    responses(
        (status = 200, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ArticleWrite>,
) -> HttpResult<Json<ArticleDto>> {
    payload.validate()?;
    state
        .services
        .article_commands
        .create_article(&user, payload.into_create_command())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleUpdateWrite,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ArticleUpdateWrite>,
) -> HttpResult<Json<ArticleDto>> {
    payload.validate()?;
    state
        .services
        .article_commands
        .update_article(&user, payload.into_update_command(id))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

/// Mounted behind the `articles:approve` capability check.
#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/approve",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article approved.", body = ArticleDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not an editor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .approve_article(id, user.id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/review",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Status and approval flag stored as given.", body = ArticleDto),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn review_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ReviewRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = ReviewArticleCommand {
        id,
        status: payload.status,
        is_approved: payload.is_approved,
    };

    state
        .services
        .article_commands
        .review_article(&user, command)
        .await
        .into_http()
        .map(Json)
}
