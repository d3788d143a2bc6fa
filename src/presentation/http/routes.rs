// src/presentation/http/routes.rs
use crate::presentation::http::middleware::require_capability;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, catalog, forms, journalists, newsletters, subscriptions},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware::{self, Next},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router. An empty origin list allows any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let editorial = Router::new()
        .route(
            "/api/v1/articles/{id}/approve",
            post(articles::approve_article),
        )
        .route_layer(middleware::from_fn(|req: Request<Body>, next: Next| {
            require_capability(req, next, "articles", "approve")
        }));

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .merge(api_routes())
        .merge(editorial)
        .merge(form_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route(
            "/api/v1/auth/me",
            get(auth::profile).patch(auth::update_profile),
        )
        .route("/api/v1/auth/password/forgot", post(auth::forgot_password))
        .route("/api/v1/auth/password/reset", post(auth::reset_password))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/review",
            post(articles::review_article),
        )
        .route(
            "/api/v1/newsletters",
            get(newsletters::list_newsletters).post(newsletters::create_newsletter),
        )
        .route(
            "/api/v1/newsletters/{id}",
            get(newsletters::get_newsletter)
                .put(newsletters::update_newsletter)
                .delete(newsletters::delete_newsletter),
        )
        .route(
            "/api/v1/publishers",
            get(catalog::list_publishers).post(catalog::create_publisher),
        )
        .route("/api/v1/publishers/{id}", get(catalog::get_publisher))
        .route(
            "/api/v1/publishers/{id}/members",
            post(catalog::add_publisher_member),
        )
        .route(
            "/api/v1/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route("/api/v1/journalists", get(journalists::list_journalists))
        .route(
            "/api/v1/journalists/{id}/independent",
            get(journalists::independent_content),
        )
        .route(
            "/api/v1/subscriptions",
            get(subscriptions::list_subscriptions).post(subscriptions::create_subscription),
        )
        .route(
            "/api/v1/subscriptions/feed",
            get(subscriptions::subscriber_feed),
        )
        .route(
            "/api/v1/subscriptions/{id}",
            axum::routing::delete(subscriptions::delete_subscription),
        )
}

fn form_routes() -> Router {
    Router::new()
        .route(
            "/forms/register",
            get(forms::describe_registration).post(forms::submit_registration),
        )
        .route(
            "/forms/articles",
            get(forms::describe_article).post(forms::submit_article),
        )
        .route(
            "/forms/articles/{id}/review",
            get(forms::describe_review).post(forms::submit_review),
        )
        .route(
            "/forms/newsletters",
            get(forms::describe_newsletter).post(forms::submit_newsletter),
        )
        .route(
            "/forms/subscriptions",
            get(forms::describe_subscription).post(forms::submit_subscription),
        )
        .route(
            "/forms/search",
            get(forms::describe_search).post(forms::submit_search),
        )
        .route(
            "/forms/password/forgot",
            get(forms::describe_forgot_password).post(forms::submit_forgot_password),
        )
        .route(
            "/forms/password/reset/{token}",
            get(forms::describe_reset_password).post(forms::submit_reset_password),
        )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> axum::Json<StatusResponse> {
    let status = match &state.db_pool {
        Some(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "ok",
            Err(err) => {
                tracing::warn!(error = %err, "database health check failed");
                "degraded"
            }
        },
        None => "ok",
    };
    axum::Json(StatusResponse::new(status))
}
