use crate::application::{dto::NewsletterDto, queries::newsletters::ListNewslettersQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use crate::presentation::serializers::NewsletterWrite;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct NewsletterListParams {
    #[serde(default)]
    pub author: Option<i64>,
    #[serde(default)]
    pub publisher: Option<i64>,
    /// Only newsletters without a publisher.
    #[serde(default)]
    pub independent: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/newsletters",
    params(NewsletterListParams),
    responses(
        (status = 200, description = "Newsletters, newest first.", body = [NewsletterDto])
    ),
    tag = "Newsletters"
)]
pub async fn list_newsletters(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NewsletterListParams>,
) -> HttpResult<Json<Vec<NewsletterDto>>> {
    let query = ListNewslettersQuery {
        author_id: params.author,
        publisher_id: params.publisher,
        independent_only: params.independent,
    };

    state
        .services
        .newsletter_queries
        .list_newsletters(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/newsletters/{id}",
    params(("id" = i64, Path, description = "Newsletter identifier")),
    responses(
        (status = 200, description = "Newsletter.", body = NewsletterDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Newsletters"
)]
pub async fn get_newsletter(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<NewsletterDto>> {
    state
        .services
        .newsletter_queries
        .get_newsletter(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletters",
    request_body = NewsletterWrite,
    responses(
        (status = 200, description = "Newsletter created.", body = NewsletterDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Newsletters"
)]
pub async fn create_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<NewsletterWrite>,
) -> HttpResult<Json<NewsletterDto>> {
    payload.validate()?;
    state
        .services
        .newsletter_commands
        .create_newsletter(&user, payload.into_create_command())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/newsletters/{id}",
    params(("id" = i64, Path, description = "Newsletter identifier")),
    request_body = NewsletterWrite,
    responses(
        (status = 200, description = "Newsletter updated.", body = NewsletterDto),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Newsletters"
)]
pub async fn update_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<NewsletterWrite>,
) -> HttpResult<Json<NewsletterDto>> {
    payload.validate()?;
    state
        .services
        .newsletter_commands
        .update_newsletter(&user, payload.into_update_command(id))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/newsletters/{id}",
    params(("id" = i64, Path, description = "Newsletter identifier")),
    responses(
        (status = 200, description = "Newsletter deleted.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Newsletters"
)]
pub async fn delete_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .newsletter_commands
        .delete_newsletter(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
