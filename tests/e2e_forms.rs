// tests/e2e_forms.rs
use axum::http::StatusCode;
use serde_json::Value;

mod support;

use support::{
    DAILY_PLANET, EDITOR_TOKEN, INDEPENDENT_ARTICLE, JOURNALIST_ID, JOURNALIST_TOKEN,
    PENDING_ARTICLE, READER_TOKEN, TestApp, assert_error_response, field_messages, form_request,
    get, read_json,
};

fn field<'a>(form: &'a Value, name: &str) -> &'a Value {
    form["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == name)
        .unwrap_or_else(|| panic!("field {name} missing"))
}

fn option_labels(field: &Value) -> Vec<String> {
    field["choices"]["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["label"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn article_form_lists_stored_choices() {
    let app = TestApp::new();
    let resp = app.send(get("/forms/articles", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let form = read_json(resp).await;

    let publisher = field(&form, "publisher");
    assert_eq!(publisher["widget"], "select");
    assert_eq!(publisher["required"], false);
    assert_eq!(option_labels(publisher), vec!["Daily Planet", "Morning Post"]);
    assert_eq!(option_labels(field(&form, "category")), vec!["Sports", "World"]);
    assert_eq!(field(&form, "content")["css_class"], "form-control");
}

#[tokio::test]
async fn subscription_form_offers_only_journalists() {
    let app = TestApp::new();
    let form = read_json(app.send(get("/forms/subscriptions", None)).await).await;
    assert_eq!(option_labels(field(&form, "journalist")), vec!["jane", "kim"]);
}

#[tokio::test]
async fn subscription_form_requires_exactly_one_target() {
    let app = TestApp::new();

    let resp = app
        .send(form_request("/forms/subscriptions", Some(READER_TOKEN), "publisher=&journalist="))
        .await;
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(
        field_messages(&body, "__all__"),
        vec!["You must subscribe to either a publisher or a journalist."]
    );

    let both = format!("publisher={DAILY_PLANET}&journalist={JOURNALIST_ID}");
    let resp = app
        .send(form_request("/forms/subscriptions", Some(READER_TOKEN), &both))
        .await;
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(
        field_messages(&body, "__all__"),
        vec!["You cannot subscribe to both a publisher and a journalist."]
    );

    let resp = app
        .send(form_request(
            "/forms/subscriptions",
            Some(READER_TOKEN),
            &format!("journalist={JOURNALIST_ID}"),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn subscription_form_rejects_a_reader_as_journalist() {
    let app = TestApp::new();
    let resp = app
        .send(form_request("/forms/subscriptions", Some(READER_TOKEN), "journalist=1"))
        .await;
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(
        field_messages(&body, "journalist"),
        vec!["Select a valid choice. That choice is not one of the available choices."]
    );
}

#[tokio::test]
async fn registration_form_checks_the_password_pair() {
    let app = TestApp::new();
    let resp = app
        .send(form_request(
            "/forms/register",
            None,
            "username=newbie&email=newbie%40example.com&first_name=New&last_name=Reader&role=reader&password1=abc12345&password2=abc12346",
        ))
        .await;
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert_eq!(field_messages(&body, "__all__"), vec!["Passwords don't match"]);

    let resp = app
        .send(form_request(
            "/forms/register",
            None,
            "username=newbie&email=newbie%40example.com&first_name=New&last_name=Reader&role=reader&password1=abc12345&password2=abc12345",
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["username"], "newbie");
}

#[tokio::test]
async fn registration_form_reports_missing_fields() {
    let app = TestApp::new();
    let resp = app.send(form_request("/forms/register", None, "")).await;
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    for name in ["username", "email", "password1", "password2"] {
        assert_eq!(
            field_messages(&body, name),
            vec!["This field is required."],
            "{name}"
        );
    }
}

#[tokio::test]
async fn article_form_rejects_an_unknown_publisher() {
    let app = TestApp::new();
    let resp = app
        .send(form_request(
            "/forms/articles",
            Some(JOURNALIST_TOKEN),
            "title=Ferry&content=Crossing+resumes&publisher=99",
        ))
        .await;
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(field_messages(&body, "publisher")[0].starts_with("Select a valid choice."));

    let resp = app
        .send(form_request(
            "/forms/articles",
            Some(JOURNALIST_TOKEN),
            &format!("title=Ferry&content=Crossing+resumes&publisher={DAILY_PLANET}"),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let article = read_json(resp).await;
    assert_eq!(article["status"], "draft");
    assert_eq!(article["publisher_id"], DAILY_PLANET);
}

#[tokio::test]
async fn review_form_checkbox_sets_approval() {
    let app = TestApp::new();
    let resp = app
        .send(form_request(
            &format!("/forms/articles/{PENDING_ARTICLE}/review"),
            Some(EDITOR_TOKEN),
            "status=published&is_approved=on",
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let article = read_json(resp).await;
    assert_eq!(article["status"], "published");
    assert_eq!(article["is_approved"], true);
    assert!(article["published_at"].is_string());
}

#[tokio::test]
async fn search_form_filters_public_articles() {
    let app = TestApp::new();
    let resp = app
        .send(form_request("/forms/search", None, "query=marathon&category=&publisher="))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = read_json(resp).await;
    let ids: Vec<i64> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![INDEPENDENT_ARTICLE]);
}

#[tokio::test]
async fn reset_form_describes_two_password_fields() {
    let app = TestApp::new();
    let form = read_json(app.send(get("/forms/password/reset/some-token", None)).await).await;
    assert_eq!(field(&form, "new_password1")["widget"], "password");
    assert_eq!(field(&form, "new_password2")["widget"], "password");
}
