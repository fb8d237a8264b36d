//! Auth API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Test registering a new user.
#[tokio::test]
#[ignore = "requires database"]
async fn test_register() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let nickname = fixtures::unique_nickname("newcomer");

    let response = server
        .post("/api/auth/register")
        .json(&fixtures::register_request(&nickname))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["nickname"].as_str().unwrap(), nickname);
    assert!(body["user_id"].as_str().is_some());

    ctx.cleanup_user(&nickname).await;
}

/// Test that a taken nickname is rejected.
#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_nickname() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let nickname = fixtures::unique_nickname("taken");

    let _ = server
        .post("/api/auth/register")
        .json(&fixtures::register_request(&nickname))
        .await;

    let response = server
        .post("/api/auth/register")
        .json(&fixtures::register_request(&nickname))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    ctx.cleanup_user(&nickname).await;
}

/// Test sign-in returns a usable session token.
#[tokio::test]
#[ignore = "requires database"]
async fn test_sign_in_and_use_token() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let nickname = fixtures::unique_nickname("signer");

    let token = common::register_and_sign_in(&server, &nickname).await;

    let response = server
        .get("/api/words")
        .add_header(AUTHORIZATION, TestContext::auth_header_value(&token))
        .await;
    response.assert_status_ok();

    ctx.cleanup_user(&nickname).await;
}

/// Test sign-in with a wrong password.
#[tokio::test]
#[ignore = "requires database"]
async fn test_sign_in_wrong_password() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let nickname = fixtures::unique_nickname("forgetful");

    let _ = server
        .post("/api/auth/register")
        .json(&fixtures::register_request(&nickname))
        .await;

    let response = server
        .post("/api/auth/sign-in")
        .json(&serde_json::json!({ "nickname": nickname, "password": "wrong" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup_user(&nickname).await;
}

/// Test sign-in with an unknown nickname.
#[tokio::test]
#[ignore = "requires database"]
async fn test_sign_in_unknown_nickname() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/auth/sign-in")
        .json(&fixtures::sign_in_request("nobody-here"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

/// Test logout invalidates the token.
#[tokio::test]
#[ignore = "requires database"]
async fn test_logout_invalidates_token() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let nickname = fixtures::unique_nickname("leaver");

    let token = common::register_and_sign_in(&server, &nickname).await;

    let response = server
        .post("/api/auth/logout")
        .add_header(AUTHORIZATION, TestContext::auth_header_value(&token))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get("/api/words")
        .add_header(AUTHORIZATION, TestContext::auth_header_value(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    ctx.cleanup_user(&nickname).await;
}

/// Test protected endpoints reject missing credentials.
#[tokio::test]
#[ignore = "requires database"]
async fn test_protected_route_requires_auth() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/words").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
