// tests/e2e_approval.rs
use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{
    EDITOR_ID, EDITOR_TOKEN, JOURNALIST_TOKEN, PENDING_ARTICLE, READER_TOKEN, TestApp,
    assert_error_response, get, json_request, read_json,
};

fn approve_uri(id: i64) -> String {
    format!("/api/v1/articles/{id}/approve")
}

#[tokio::test]
async fn approve_without_token_is_unauthorized() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(Method::POST, &approve_uri(PENDING_ARTICLE), None, json!({})))
        .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn readers_and_journalists_cannot_approve() {
    let app = TestApp::new();
    for token in [READER_TOKEN, JOURNALIST_TOKEN] {
        let resp = app
            .send(json_request(
                Method::POST,
                &approve_uri(PENDING_ARTICLE),
                Some(token),
                json!({}),
            ))
            .await;
        assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
    }

    let untouched = app.articles.get(PENDING_ARTICLE).unwrap();
    assert!(!untouched.is_approved);
    assert!(untouched.approved_by.is_none());
}

#[tokio::test]
async fn editor_approval_sets_every_approval_field() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(
            Method::POST,
            &approve_uri(PENDING_ARTICLE),
            Some(EDITOR_TOKEN),
            json!({}),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["is_approved"], true);
    assert_eq!(body["status"], "approved");
    assert_eq!(body["approved_by"], EDITOR_ID);
    assert!(body["approved_at"].is_string());

    let stored = app.articles.get(PENDING_ARTICLE).unwrap();
    assert!(stored.is_approved);
    assert_eq!(stored.approved_by.map(|id| id.0), Some(EDITOR_ID));
}

#[tokio::test]
async fn approving_twice_keeps_the_article_approved() {
    let app = TestApp::new();
    for _ in 0..2 {
        let resp = app
            .send(json_request(
                Method::POST,
                &approve_uri(PENDING_ARTICLE),
                Some(EDITOR_TOKEN),
                json!({}),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let stored = app.articles.get(PENDING_ARTICLE).unwrap();
    assert!(stored.is_approved);
    assert_eq!(stored.status.as_str(), "approved");
}

#[tokio::test]
async fn approving_a_missing_article_is_not_found() {
    let app = TestApp::new();
    let resp = app
        .send(json_request(Method::POST, &approve_uri(999), Some(EDITOR_TOKEN), json!({})))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn review_writes_status_and_flag_independently() {
    let app = TestApp::new();
    let uri = format!("/api/v1/articles/{PENDING_ARTICLE}/review");

    let resp = app
        .send(json_request(
            Method::POST,
            &uri,
            Some(JOURNALIST_TOKEN),
            json!({ "status": "rejected", "is_approved": true }),
        ))
        .await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;

    let resp = app
        .send(json_request(
            Method::POST,
            &uri,
            Some(EDITOR_TOKEN),
            json!({ "status": "rejected", "is_approved": true }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "rejected");
    assert_eq!(body["is_approved"], true);
    assert!(body["approved_by"].is_null());
}

#[tokio::test]
async fn visibility_follows_status_not_the_approval_flag() {
    let app = TestApp::new();
    let uri = format!("/api/v1/articles/{PENDING_ARTICLE}");
    let resp = app
        .send(json_request(
            Method::POST,
            &format!("{uri}/review"),
            Some(EDITOR_TOKEN),
            json!({ "status": "pending", "is_approved": true }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = app.send(get(&uri, None)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = app
        .send(json_request(
            Method::POST,
            &format!("{uri}/review"),
            Some(EDITOR_TOKEN),
            json!({ "status": "published", "is_approved": false }),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = app.send(get(&uri, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
