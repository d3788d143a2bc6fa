use crate::application::{
    dto::{ArticleListItemDto, CursorPage, SubscriptionDto},
    queries::articles::SubscriberFeedQuery,
};
use crate::presentation::http::controllers::journalists::PageParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use crate::presentation::serializers::SubscriptionWrite;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions",
    responses(
        (status = 200, description = "The caller's subscriptions.", body = [SubscriptionDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn list_subscriptions(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<SubscriptionDto>>> {
    state
        .services
        .subscription_queries
        .list_subscriptions(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/subscriptions",
    request_body = SubscriptionWrite,
    responses(
        (status = 200, description = "Subscribed.", body = SubscriptionDto),
        (status = 400, description = "Neither or both targets given.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown target.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already subscribed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn create_subscription(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SubscriptionWrite>,
) -> HttpResult<Json<SubscriptionDto>> {
    payload.validate()?;
    state
        .services
        .subscription_commands
        .subscribe(&user, payload.into_command())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/subscriptions/{id}",
    params(("id" = i64, Path, description = "Subscription identifier")),
    responses(
        (status = 200, description = "Unsubscribed.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 404, description = "Not one of the caller's subscriptions.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn delete_subscription(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .subscription_commands
        .unsubscribe(&user, id)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions/feed",
    params(PageParams),
    responses(
        (status = 200, description = "Public articles from followed publishers and journalists.", body = crate::presentation::http::openapi::ArticleListResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Subscriptions"
)]
pub async fn subscriber_feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CursorPage<ArticleListItemDto>>> {
    state
        .services
        .article_queries
        .subscriber_feed(
            &user,
            SubscriberFeedQuery {
                limit: params.limit,
                cursor: params.cursor,
            },
        )
        .await
        .into_http()
        .map(Json)
}
