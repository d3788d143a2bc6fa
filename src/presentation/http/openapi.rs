// src/presentation/http/openapi.rs
use crate::application::dto::ArticleListItemDto;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Schema twin of `CursorPage<ArticleListItemDto>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleListItemDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::auth::update_profile,
        crate::presentation::http::controllers::auth::forgot_password,
        crate::presentation::http::controllers::auth::reset_password,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::approve_article,
        crate::presentation::http::controllers::articles::review_article,
        crate::presentation::http::controllers::newsletters::list_newsletters,
        crate::presentation::http::controllers::newsletters::get_newsletter,
        crate::presentation::http::controllers::newsletters::create_newsletter,
        crate::presentation::http::controllers::newsletters::update_newsletter,
        crate::presentation::http::controllers::newsletters::delete_newsletter,
        crate::presentation::http::controllers::catalog::list_publishers,
        crate::presentation::http::controllers::catalog::get_publisher,
        crate::presentation::http::controllers::catalog::create_publisher,
        crate::presentation::http::controllers::catalog::add_publisher_member,
        crate::presentation::http::controllers::catalog::list_categories,
        crate::presentation::http::controllers::catalog::create_category,
        crate::presentation::http::controllers::journalists::list_journalists,
        crate::presentation::http::controllers::journalists::independent_content,
        crate::presentation::http::controllers::subscriptions::list_subscriptions,
        crate::presentation::http::controllers::subscriptions::create_subscription,
        crate::presentation::http::controllers::subscriptions::delete_subscription,
        crate::presentation::http::controllers::subscriptions::subscriber_feed,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::auth::ForgotPasswordRequest,
            crate::presentation::http::controllers::auth::ResetPasswordRequest,
            crate::presentation::http::controllers::articles::ReviewRequest,
            crate::presentation::http::controllers::catalog::CreatePublisherRequest,
            crate::presentation::http::controllers::catalog::AddMemberRequest,
            crate::presentation::http::controllers::catalog::CreateCategoryRequest,
            crate::presentation::http::controllers::journalists::IndependentContentResponse,
            crate::presentation::serializers::ArticleWrite,
            crate::presentation::serializers::ArticleUpdateWrite,
            crate::presentation::serializers::NewsletterWrite,
            crate::presentation::serializers::SubscriptionWrite,
            crate::presentation::serializers::UserWrite,
            crate::presentation::forms::FormDescription,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListItemDto,
            crate::application::dto::PublisherDto,
            crate::application::dto::PublisherDetailDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::NewsletterDto,
            crate::application::dto::SubscriptionDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and password reset"),
        (name = "Users", description = "Journalist listings"),
        (name = "Articles", description = "Articles and the approval workflow"),
        (name = "Newsletters", description = "Newsletters"),
        (name = "Catalog", description = "Publishers and categories"),
        (name = "Subscriptions", description = "Subscriptions and the subscriber feed"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Newsdesk API",
        description = "News platform with editorial approval and subscriptions",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:3000") {
            urls.push("http://localhost:3000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
