use crate::application::{
    dto::{ArticleListItemDto, CursorPage, NewsletterDto, UserDto},
    queries::articles::IndependentArticlesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PageParams {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Articles and newsletters a journalist published without a publisher.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndependentContentResponse {
    pub articles: CursorPage<ArticleListItemDto>,
    pub newsletters: Vec<NewsletterDto>,
}

#[utoipa::path(
    get,
    path = "/api/v1/journalists",
    responses((status = 200, description = "Active journalists.", body = [UserDto])),
    tag = "Users"
)]
pub async fn list_journalists(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_journalists()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/journalists/{id}/independent",
    params(("id" = i64, Path, description = "Journalist identifier"), PageParams),
    responses(
        (status = 200, description = "Independent content.", body = IndependentContentResponse),
        (status = 400, description = "Invalid identifier or cursor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn independent_content(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<IndependentContentResponse>> {
    let articles = state
        .services
        .article_queries
        .independent_articles(IndependentArticlesQuery {
            journalist_id: id,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()?;
    let newsletters = state
        .services
        .newsletter_queries
        .independent_newsletters(id)
        .await
        .into_http()?;

    Ok(Json(IndependentContentResponse {
        articles,
        newsletters,
    }))
}
