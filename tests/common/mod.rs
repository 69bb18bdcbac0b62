#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use publisher_registry::infrastructure::persistence::MemoryStore;
use publisher_registry::routes::{app_router, app_routes};
use publisher_registry::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_state(store: MemoryStore) -> AppState {
    AppState::new(Arc::new(store))
}

pub fn make_server(store: MemoryStore) -> TestServer {
    TestServer::new(app_routes(create_test_state(store))).unwrap()
}

/// Serves the full router, including trailing-slash trimming, as `server::run` does.
pub fn make_normalized_server(store: MemoryStore) -> TestServer {
    let app = app_router(create_test_state(store));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn empty_server() -> TestServer {
    make_server(MemoryStore::new())
}

pub fn seeded_server() -> TestServer {
    make_server(MemoryStore::with_sample_data())
}

pub async fn create_publisher(server: &TestServer, name: &str) {
    server
        .post("/publishers")
        .json(&json!({ "publisher": name }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

pub async fn create_domain(
    server: &TestServer,
    publisher: &str,
    domain: &str,
    desktop_ads: i64,
    mobile_ads: i64,
) -> Value {
    let response = server
        .post(&format!("/publishers/{}/domains", encode(publisher)))
        .json(&json!({
            "domain": domain,
            "desktopAds": desktop_ads,
            "mobileAds": mobile_ads,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn list_publishers(server: &TestServer) -> Vec<Value> {
    let response = server.get("/publishers").await;
    response.assert_status_ok();
    response.json::<Vec<Value>>()
}

/// Percent-encodes the spaces used in sample publisher names.
pub fn encode(segment: &str) -> String {
    segment.replace(' ', "%20")
}
