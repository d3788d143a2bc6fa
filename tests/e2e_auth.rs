// tests/e2e_auth.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{
    FIXTURE_PASSWORD, JOURNALIST_TOKEN, READER_TOKEN, TestApp, assert_error_response,
    field_messages, get, json_request, read_json,
};

#[tokio::test]
async fn register_then_login() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            json!({
                "username": "maria",
                "email": "maria@example.com",
                "first_name": "Maria",
                "role": "journalist",
                "password": "longenough1"
            }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user = read_json(resp).await;
    assert_eq!(user["username"], "maria");
    assert_eq!(user["role"], "journalist");
    assert!(user.get("password_hash").is_none());

    let resp = app
        .send(json_request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            json!({ "username": "maria", "password": "longenough1" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["user"]["username"], "maria");
    assert!(body["token"]["token"].as_str().unwrap().starts_with("issued-"));
}

#[tokio::test]
async fn role_defaults_to_reader() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            json!({ "username": "sam", "email": "sam@example.com", "password": "longenough1" }),
        ))
        .await;
    assert_eq!(read_json(resp).await["role"], "reader");
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            json!({ "username": "alice", "email": "other@example.com", "password": "longenough1" }),
        ))
        .await;
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            json!({ "username": "alice", "password": "not-the-password" }),
        ))
        .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .send(json_request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            json!({ "username": "alice", "password": FIXTURE_PASSWORD }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn profile_lists_role_capabilities() {
    let app = TestApp::new();
    let resp = app.send(get("/api/v1/auth/me", Some(JOURNALIST_TOKEN))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["user"]["username"], "jane");
    let caps: Vec<String> = body["capabilities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cap| format!("{}:{}", cap["resource"].as_str().unwrap(), cap["action"].as_str().unwrap()))
        .collect();
    assert!(caps.contains(&"articles:create".to_string()));
    assert!(!caps.contains(&"articles:approve".to_string()));
}

#[tokio::test]
async fn invalid_token_is_unauthorized() {
    let app = TestApp::new();
    let resp = app.send(get("/api/v1/auth/me", Some("bogus"))).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn profile_update_validates_the_email() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::PATCH,
            "/api/v1/auth/me",
            Some(READER_TOKEN),
            json!({ "email": "not-an-email" }),
        ))
        .await;
    let body = assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    assert!(!field_messages(&body, "email").is_empty());

    let resp = app
        .send(json_request(
            Method::PATCH,
            "/api/v1/auth/me",
            Some(READER_TOKEN),
            json!({ "first_name": "Alice" }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["first_name"], "Alice");
    assert_eq!(app.users.get(1).unwrap().first_name, "Alice");
}
