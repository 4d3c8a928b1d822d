use axum::http::StatusCode;
use axum_test::{TestRequest, TestServer};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use campus_platform::infra::storage::LocalDiskStorage;
use campus_platform::router::build_router;
use campus_platform::state::AppState;
use campus_testing::auth::MockAuth;

/// Router over a disconnected database: every repository call fails.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        storage: LocalDiskStorage::new(std::env::temp_dir().join("campus-router-test")),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn authenticated(request: TestRequest, auth: &MockAuth) -> TestRequest {
    let (name, value) = auth.header();
    request.add_header(name, value)
}

#[tokio::test]
async fn should_answer_liveness_check() {
    let response = server().get("/healthz").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn should_fail_readiness_without_database() {
    let response = server().get("/readyz").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_missing_identity() {
    let server = server();
    server
        .get("/questions")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .delete(&format!("/users/{}", Uuid::now_v7()))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_malformed_identity_even_on_open_routes() {
    let (name, value) = MockAuth::malformed_header();
    let response = server()
        .post("/users")
        .add_header(name, value)
        .json(&serde_json::json!({
            "name": "Dana Saleh",
            "email": "dana@example.test",
            "password": "123456",
            "gender": 1
        }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_malformed_path_id() {
    let server = server();
    let auth = MockAuth::random();
    let response = authenticated(server.put("/comments/not-a-uuid/rate"), &auth)
        .json(&serde_json::json!({ "rate": 3 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_render_internal_error_as_json() {
    let server = server();
    let auth = MockAuth::random();
    let response = authenticated(server.get("/questions"), &auth).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INTERNAL");
}

#[tokio::test]
async fn should_set_request_id_on_responses() {
    let response = server().get("/healthz").await;
    assert!(response.headers().contains_key("x-request-id"));
}
