use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    assert_eq!(response.text(), "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_header(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header_exists("x-request-id");

    let request_id = response.header("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_on_rejections(ctx: &TestContext) {
    let response = ctx.client.get("/api/hello").await.unwrap();

    response
        .assert_status(StatusCode::FORBIDDEN)
        .assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_expose_token_headers_to_browsers(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_header("/health", "Origin", "http://localhost:3000")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let exposed = response
        .header("access-control-expose-headers")
        .expect("Missing access-control-expose-headers")
        .to_lowercase();
    assert!(exposed.contains("x-access-token"));
    assert!(exposed.contains("x-refresh-token"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
