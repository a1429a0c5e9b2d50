// tests/api_http.rs
//
// Router-level tests driven through tower's oneshot, no listening socket.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use hearth::server::build_router;
use hearth::state::AppState;

async fn test_router() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("create in-memory sqlite");

    let migrations = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    hearth::db::run_migrations(&pool, &migrations)
        .await
        .expect("run migrations");

    // No API key: the AI endpoint should answer with its canned message
    let state = Arc::new(AppState::new(pool, None, "http://unused.invalid".to_string()));
    build_router(state)
}

fn json_request(method: &str, uri: &str, user_id: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(id) = user_id {
        builder = builder.header("x-user-id", id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, user_id: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = user_id {
        builder = builder.header("x-user-id", id);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(router: &Router, email: &str, invite_code: Option<&str>) -> Value {
    let mut payload = json!({"email": email, "name": "Alex", "role": "GUARDIAN"});
    if let Some(code) = invite_code {
        payload["inviteCode"] = json!(code);
    }
    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/users/register", None, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn register_and_fetch_me() {
    let router = test_router().await;
    let user = register(&router, "alex@example.com", None).await;
    let user_id = user["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(get_request("/api/users/me", Some(user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let me = body_json(response).await;
    assert_eq!(me["email"], "alex@example.com");
    assert_eq!(me["role"], "GUARDIAN");
    assert!(me["householdId"].is_string());
}

#[tokio::test]
async fn missing_identity_header_is_unauthorized() {
    let router = test_router().await;
    let response = router
        .clone()
        .oneshot(get_request("/api/users/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let router = test_router().await;
    let response = router
        .clone()
        .oneshot(get_request("/api/users/me", Some("nope")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let router = test_router().await;
    register(&router, "dup@example.com", None).await;

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users/register",
            None,
            json!({"email": "dup@example.com", "name": "Alex"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invite_code_joins_existing_household() {
    let router = test_router().await;
    let founder = register(&router, "founder@example.com", None).await;
    let founder_id = founder["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(get_request(
            "/api/users/household/invite-code",
            Some(founder_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let code = body_json(response).await;
    let code = code.as_str().unwrap().to_string();

    let joiner = register(&router, "joiner@example.com", Some(&code)).await;
    assert_eq!(joiner["householdId"], founder["householdId"]);

    let response = router
        .clone()
        .oneshot(get_request("/api/users/household", Some(founder_id)))
        .await
        .unwrap();
    let members = body_json(response).await;
    assert_eq!(members.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn bad_invite_code_is_rejected() {
    let router = test_router().await;
    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users/register",
            None,
            json!({"email": "x@example.com", "name": "X", "inviteCode": "WRONG123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chore_create_complete_and_list() {
    let router = test_router().await;
    let user = register(&router, "chores@example.com", None).await;
    let user_id = user["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/chores",
            Some(user_id),
            json!({
                "title": "Dishes",
                "dueDate": "2025-06-01T18:00:00",
                "points": 10,
                "assignedToId": user_id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let chore = body_json(response).await;
    assert_eq!(chore["completed"], false);

    let chore_id = chore["id"].as_str().unwrap();
    let response = router
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/chores/{}/complete", chore_id),
            Some(user_id),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let completed = body_json(response).await;
    assert_eq!(completed["completed"], true);

    let response = router
        .clone()
        .oneshot(get_request("/api/chores/pending", Some(user_id)))
        .await
        .unwrap();
    let pending = body_json(response).await;
    assert!(pending.as_array().unwrap().is_empty());

    let response = router
        .clone()
        .oneshot(get_request("/api/chores/leaderboard", Some(user_id)))
        .await
        .unwrap();
    let leaderboard = body_json(response).await;
    assert_eq!(leaderboard[user_id], 10);
}

#[tokio::test]
async fn schedule_endpoint_rejects_blank_text() {
    let router = test_router().await;
    let user = register(&router, "ai@example.com", None).await;
    let user_id = user["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/ai/schedule",
            Some(user_id),
            json!({"text": "   "}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn schedule_endpoint_reports_missing_api_key_as_message() {
    let router = test_router().await;
    let user = register(&router, "nokey@example.com", None).await;
    let user_id = user["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/ai/schedule",
            Some(user_id),
            json!({"text": "buy milk tomorrow"}),
        ))
        .await
        .unwrap();
    // Feature-unavailable is a 200 with a message, not an HTTP error
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], hearth::schedule::MSG_NOT_CONFIGURED);
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["choresCreated"], 0);
}

#[tokio::test]
async fn schedule_endpoint_requires_guardian_role() {
    let router = test_router().await;

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users/register",
            None,
            json!({"email": "kid@example.com", "name": "Kit", "role": "MEMBER"}),
        ))
        .await
        .unwrap();
    let member = body_json(response).await;
    let member_id = member["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/ai/schedule",
            Some(member_id),
            json!({"text": "buy milk"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn device_registration_is_idempotent() {
    let router = test_router().await;
    let user = register(&router, "device@example.com", None).await;
    let user_id = user["id"].as_str().unwrap();

    for _ in 0..2 {
        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/notifications/register",
                Some(user_id),
                json!({"token": "tok-abc", "platform": "android"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(json_request(
            "DELETE",
            "/api/notifications/unregister",
            Some(user_id),
            json!({"token": "tok-abc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn grocery_flow_over_http() {
    let router = test_router().await;
    let user = register(&router, "shop@example.com", None).await;
    let user_id = user["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/groceries",
            Some(user_id),
            json!({"name": "Milk", "category": "DAIRY", "neededByDate": "2025-06-20"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let item = body_json(response).await;
    assert_eq!(item["category"], "DAIRY");
    assert_eq!(item["checked"], false);

    let item_id = item["id"].as_str().unwrap();
    let response = router
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/groceries/{}/toggle", item_id),
            Some(user_id),
            json!({}),
        ))
        .await
        .unwrap();
    let toggled = body_json(response).await;
    assert_eq!(toggled["checked"], true);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/groceries/clear-checked")
                .header("x-user-id", user_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .clone()
        .oneshot(get_request("/api/groceries", Some(user_id)))
        .await
        .unwrap();
    let remaining = body_json(response).await;
    assert!(remaining.as_array().unwrap().is_empty());
}
