use crate::e2e::helpers;

use helpers::{foreign_token, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;
use tokengate_backend::domain::auth::TokenType;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_greet_caller_with_access_token(ctx: &TestContext) {
    let (access_token, _) = ctx.login().await;

    let response = ctx
        .client
        .get_with_auth("/api/hello", &access_token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "Hello, user!");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_refreshed_access_token(ctx: &TestContext) {
    let (_, refresh_token) = ctx.login().await;

    let refreshed = ctx
        .client
        .post("/auth/refresh", &json!({ "refreshToken": refresh_token }))
        .await
        .unwrap();
    let access_token = refreshed.header("x-access-token").unwrap();

    let response = ctx
        .client
        .get_with_auth("/api/hello", access_token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "Hello, user!");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forbid_unauthenticated_request(ctx: &TestContext) {
    let response = ctx.client.get("/api/hello").await.unwrap();

    response
        .assert_status(StatusCode::FORBIDDEN)
        .assert_message("Access denied");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forbid_refresh_token_as_bearer(ctx: &TestContext) {
    let (_, refresh_token) = ctx.login().await;

    let response = ctx
        .client
        .get_with_auth("/api/hello", &refresh_token)
        .await
        .unwrap();

    response.assert_status(StatusCode::FORBIDDEN);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forbid_expired_or_foreign_access_tokens(ctx: &TestContext) {
    for token in [
        ctx.expired_token(TokenType::Access),
        foreign_token(TokenType::Access),
        "not.a.jwt".to_string(),
    ] {
        let response = ctx
            .client
            .get_with_auth("/api/hello", &token)
            .await
            .unwrap();

        response.assert_status(StatusCode::FORBIDDEN);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_bearer_scheme(ctx: &TestContext) {
    let (access_token, _) = ctx.login().await;

    let invalid_headers = vec![
        format!("Basic {}", access_token),
        access_token.clone(), // Missing Bearer prefix
        "Bearer".to_string(), // Missing token
    ];

    for value in invalid_headers {
        let response = ctx
            .client
            .get_with_header("/api/hello", "Authorization", &value)
            .await
            .unwrap();

        response.assert_status(StatusCode::FORBIDDEN);
    }
}
