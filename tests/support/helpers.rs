// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use newsdesk::application::services::{ApplicationServices, Ports, Repositories};
use newsdesk::domain::{article::ArticleStatus, user::Role};
use newsdesk::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::builders::{ArticleBuilder, category, publisher, user};
use super::mocks::{
    DummyTokenManager, InMemoryArticleRepo, InMemoryCategoryRepo, InMemoryNewsletterRepo,
    InMemoryPublisherRepo, InMemoryResetTokenRepo, InMemorySubscriptionRepo, InMemoryUserRepo,
    PlainPasswordHasher, RecordingNotifier, SequentialResetTokens, TestClock,
};

pub const PENDING_ARTICLE: i64 = 1;
pub const INDEPENDENT_ARTICLE: i64 = 2;
pub const POST_ARTICLE: i64 = 3;
pub const DRAFT_ARTICLE: i64 = 4;

pub const DAILY_PLANET: i64 = 1;
pub const MORNING_POST: i64 = 2;
pub const SECOND_JOURNALIST_ID: i64 = 4;

/// Router plus handles on the in-memory collaborators behind it.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticleRepo>,
    pub subscriptions: Arc<InMemorySubscriptionRepo>,
    pub reset_tokens: Arc<InMemoryResetTokenRepo>,
    pub notifier: Arc<RecordingNotifier>,
    pub clock: Arc<TestClock>,
}

impl TestApp {
    /// Seeded with a reader (1), two journalists (2, 4), an editor (3), two
    /// publishers, two categories and four articles in different states.
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepo::with_users(vec![
            user(1, "alice", Role::Reader),
            user(2, "jane", Role::Journalist),
            user(3, "ed", Role::Editor),
            user(SECOND_JOURNALIST_ID, "kim", Role::Journalist),
        ]));
        let publishers = Arc::new(InMemoryPublisherRepo::with_publishers(vec![
            publisher(DAILY_PLANET, "Daily Planet", &[3], &[2]),
            publisher(MORNING_POST, "Morning Post", &[], &[SECOND_JOURNALIST_ID]),
        ]));
        let categories = Arc::new(InMemoryCategoryRepo::with_categories(vec![
            category(1, "World"),
            category(2, "Sports"),
        ]));
        let articles = Arc::new(InMemoryArticleRepo::with_articles(vec![
            ArticleBuilder::new(PENDING_ARTICLE)
                .title("Harbour expansion pending")
                .publisher(DAILY_PLANET)
                .category(1)
                .status(ArticleStatus::Pending)
                .build(),
            ArticleBuilder::new(INDEPENDENT_ARTICLE)
                .title("City marathon results")
                .category(2)
                .approved()
                .build(),
            ArticleBuilder::new(POST_ARTICLE)
                .title("Morning Post exclusive")
                .author(SECOND_JOURNALIST_ID)
                .publisher(MORNING_POST)
                .approved()
                .build(),
            ArticleBuilder::new(DRAFT_ARTICLE)
                .title("Unfinished draft")
                .author(SECOND_JOURNALIST_ID)
                .build(),
        ]));
        let newsletters = Arc::new(InMemoryNewsletterRepo::default());
        let subscriptions = Arc::new(InMemorySubscriptionRepo::default());
        let reset_tokens = Arc::new(InMemoryResetTokenRepo::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let clock = Arc::new(TestClock::new());

        let repos = Repositories {
            users: users.clone(),
            publishers,
            categories,
            article_writes: articles.clone(),
            article_reads: articles.clone(),
            newsletters,
            subscriptions: subscriptions.clone(),
            reset_tokens: reset_tokens.clone(),
        };
        let ports = Ports {
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(DummyTokenManager),
            reset_token_generator: Arc::new(SequentialResetTokens::default()),
            reset_notifier: notifier.clone(),
            clock: clock.clone(),
        };

        let state = HttpState {
            services: Arc::new(ApplicationServices::new(repos, ports)),
            db_pool: None,
        };

        Self {
            router: build_router(state, &[]),
            users,
            articles,
            subscriptions,
            reset_tokens,
            notifier,
            clock,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.unwrap()
    }
}

pub async fn make_test_router() -> Router {
    TestApp::new().router
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn form_request(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status
/// and error string, returning the parsed body.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// Messages recorded for one field of a 400 response body.
pub fn field_messages(json: &Value, field: &str) -> Vec<String> {
    json.get("fields")
        .and_then(|fields| fields.get(field))
        .and_then(Value::as_array)
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
