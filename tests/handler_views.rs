mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use common::{Replies, create_test_state, spawn_backend};
use domain_lookup::routes::{app_router, router};
use serde_json::{Value, json};
use tower::ServiceExt;

#[tokio::test]
async fn test_home_view() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["view"], "Home");
    assert_eq!(json["path"], "/");
    assert_eq!(json["state"]["report"], Value::Null);
    assert_eq!(json["state"]["flags"]["submitting"], false);
}

#[tokio::test]
async fn test_post_domain_runs_lookup() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    let response = server
        .post("/domain")
        .json(&json!({ "domainName": "google.com" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["view"], "Domain");
    assert_eq!(json["state"]["report"]["title"], "Google");
    assert_eq!(json["state"]["report"]["servers"].as_array().unwrap().len(), 2);
    assert_eq!(json["state"]["flags"]["show_info"], true);
    assert_eq!(json["state"]["flags"]["submitting"], false);
    assert_eq!(json["state"]["error"]["active"], false);

    // Report stays visible on the plain Domain view.
    let response = server.get("/domain").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["state"]["report"]["ssl_grade"], "A");
}

#[tokio::test]
async fn test_post_domain_empty_name() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    let response = server.post("/domain").json(&json!({ "domainName": "" })).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["state"]["error"]["message"], "cannot be empty domain name");
    assert_eq!(json["state"]["error"]["active"], true);
    assert_eq!(stub.domain_hits(), 0);
}

#[tokio::test]
async fn test_post_domain_missing_field_is_empty_name() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    let response = server.post("/domain").json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["state"]["error"]["message"],
        "cannot be empty domain name"
    );
}

#[tokio::test]
async fn test_post_domain_invalid_json() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    let response = server.post("/domain").text("domainName=google.com").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_domains_view_loads_history() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    let response = server.get("/domains").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["view"], "Domains");
    let history = json["state"]["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["title"], "google.com");
    assert!(history[0].get("servers").is_none());
    assert_eq!(json["state"]["flags"]["loading"], false);
    assert_eq!(stub.history_hits(), 1);
}

#[tokio::test]
async fn test_unknown_path() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    let response = server.get("/about").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/about");
}

#[tokio::test]
async fn test_wrong_method() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/"))).unwrap();

    server
        .delete("/domain")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    server
        .post("/domains")
        .json(&json!({}))
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_views_under_base_path() {
    let stub = spawn_backend(Replies::default()).await;
    let server = TestServer::new(router(create_test_state(stub.client(), "/app"))).unwrap();

    let response = server.get("/app/domains").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["path"], "/app/domains");

    server.get("/app").await.assert_status_ok();
    server
        .get("/domains")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let stub = spawn_backend(Replies::default()).await;
    let app = app_router(create_test_state(stub.client(), "/"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/domain/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
