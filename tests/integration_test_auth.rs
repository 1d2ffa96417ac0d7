mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &TestApp, uri: &str, body: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;
    let id = app.register_student("S-1", "s1@example.com", "student-pw", None).await;

    let res = post_json(&app, "/api/v1/auth/login", json!({
        "id_number": "S-1",
        "password": "student-pw"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["user"]["id"].as_str().unwrap(), id);
    assert_eq!(body["user"]["role"], "student");
    assert!(body["csrf_token"].as_str().is_some());
}

#[tokio::test]
async fn test_duplicate_registration_is_conflict() {
    let app = TestApp::new().await;
    app.register_student("S-1", "s1@example.com", "student-pw", None).await;

    let res = post_json(&app, "/api/v1/auth/register", json!({
        "first_name": "Ben",
        "last_name": "Cruz",
        "email": "s1@example.com",
        "password": "other-pw",
        "id_number": "S-2",
        "year_level": "2",
        "section": "A"
    })).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "Email or ID number already registered");
}

#[tokio::test]
async fn test_register_with_unknown_group_is_rejected() {
    let app = TestApp::new().await;

    let res = post_json(&app, "/api/v1/auth/register", json!({
        "first_name": "Ben",
        "last_name": "Cruz",
        "email": "ben@example.com",
        "password": "other-pw",
        "id_number": "S-2",
        "year_level": "2",
        "section": "A",
        "group_id": "no-such-group"
    })).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.register_student("S-1", "s1@example.com", "student-pw", None).await;

    let res = post_json(&app, "/api/v1/auth/login", json!({
        "id_number": "S-1",
        "password": "wrong-pw"
    })).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = post_json(&app, "/api/v1/auth/login", json!({
        "id_number": "nobody",
        "password": "wrong-pw"
    })).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password_flow() {
    let app = TestApp::new().await;
    app.register_student("S-1", "s1@example.com", "old-password", None).await;
    let auth = app.login("S-1", "old-password").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/change-password")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "old_password": "old-password",
                "new_password": "new-password"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = post_json(&app, "/api/v1/auth/login", json!({
        "id_number": "S-1",
        "password": "old-password"
    })).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = post_json(&app, "/api/v1/auth/login", json!({
        "id_number": "S-1",
        "password": "new-password"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_rejects_wrong_old_password() {
    let app = TestApp::new().await;
    app.register_student("S-1", "s1@example.com", "old-password", None).await;
    let auth = app.login("S-1", "old-password").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/change-password")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "old_password": "not-it",
                "new_password": "new-password"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "Old password is incorrect");
}

#[tokio::test]
async fn test_mutating_requests_require_csrf_header() {
    let app = TestApp::new().await;
    app.register_student("S-1", "s1@example.com", "student-pw", None).await;
    let auth = app.login("S-1", "student-pw").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/change-password")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "old_password": "student-pw",
                "new_password": "new-password"
            }).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_groups_are_publicly_listable() {
    let app = TestApp::new().await;
    app.seed_admin("A-1", "secret-pw").await;
    let admin = app.login("A-1", "secret-pw").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/groups")
            .header(header::COOKIE, format!("access_token={}", admin.access_token))
            .header("X-CSRF-Token", &admin.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "name": "Falcons" }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/groups")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let names: Vec<&str> = body.as_array().unwrap().iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Falcons"]);
}

#[tokio::test]
async fn test_duplicate_group_name_is_conflict() {
    let app = TestApp::new().await;
    app.seed_admin("A-1", "secret-pw").await;
    let admin = app.login("A-1", "secret-pw").await;

    let create = |body: Value| {
        app.router.clone().oneshot(
            Request::builder().method("POST").uri("/api/v1/admin/groups")
                .header(header::COOKIE, format!("access_token={}", admin.access_token))
                .header("X-CSRF-Token", &admin.csrf_token)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())).unwrap()
        )
    };

    let res = create(json!({ "name": "Falcons" })).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // No pre-check on group names; the UNIQUE constraint surfaces as 409.
    let res = create(json!({ "name": "Falcons" })).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "Duplicate entry");
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/health")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}
