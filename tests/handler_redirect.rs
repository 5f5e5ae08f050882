mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (app, store) = common::create_test_app();
    store.seed("ABC123", "https://example.com/target");
    let server = TestServer::new(app).unwrap();

    let response = server.get("/urls/ABC123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_each_call() {
    let (app, store) = common::create_test_app();
    store.seed("ABC123", "https://example.com");
    let server = TestServer::new(app).unwrap();

    for _ in 0..3 {
        server
            .get("/urls/ABC123")
            .await
            .assert_status(StatusCode::FOUND);
    }

    assert_eq!(store.record("ABC123").unwrap().call_count, 3);
}

#[tokio::test]
async fn test_redirect_root_alias() {
    let (app, store) = common::create_test_app();
    store.seed("ABC123", "https://example.com");
    let server = TestServer::new(app).unwrap();

    let response = server.get("/ABC123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
    assert_eq!(store.record("ABC123").unwrap().call_count, 1);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/urls/NOPE00").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "NO_RESULT");
    assert_eq!(json["message"], "This url does not exist.");
}

#[tokio::test]
async fn test_redirect_keys_are_case_sensitive() {
    let (app, store) = common::create_test_app();
    store.seed("ABC123", "https://example.com");
    let server = TestServer::new(app).unwrap();

    server
        .get("/urls/abc123")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(store.record("ABC123").unwrap().call_count, 0);
}

#[tokio::test]
async fn test_redirect_storage_failure_is_generic() {
    let (app, store) = common::create_test_app();
    store.seed("ABC123", "https://example.com");
    store.set_failing(true);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/urls/ABC123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<serde_json::Value>()["error"], "GENERIC");
}

#[tokio::test]
async fn test_shortened_url_redirects_to_origin() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/urls")
        .json(&json!({ "url": "https://www.rust-lang.org/learn" }))
        .await
        .json::<serde_json::Value>();
    let key = common::key_of(created["short_url"].as_str().unwrap());

    let response = server.get(&format!("/urls/{key}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");
}

#[tokio::test]
async fn test_redirect_unstorable_key_is_not_found_without_storage() {
    let (app, store) = common::create_test_app();
    store.set_failing(true);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/urls/AB%00CD").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<serde_json::Value>()["error"], "NO_RESULT");

    let long_key = "A".repeat(17);
    server
        .get(&format!("/{long_key}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_redirect_invalid_utf8_key_is_json_not_found() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/urls/%FF%FE").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({
        "error": "NO_RESULT",
        "message": "This url does not exist."
    }));
}
