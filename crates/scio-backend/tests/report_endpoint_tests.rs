//! Integration tests for the report and SEO endpoints.
//!
//! Routes tested:
//! - `GET /api/report/blacklist?event=<name>` — single-event lookup
//! - `GET /api/report/blacklist`              — all-events aggregation
//! - `GET /api/health`
//! - `GET /robots.txt`
//! - `GET /sitemap.xml`
//!
//! A failing store stub checks that any store error surfaces as the fixed
//! 500 body rather than a partial result.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use scio::data::{BlacklistResponse, BlacklistsResponse, ErrorResponse, HealthResponse, HealthStatus};
use scio::errors::StoreError;
use scio_backend::AppState;
use scio_backend::services::{BlacklistStore, BlacklistStoreInMemory};

struct FailingStore;

#[async_trait]
impl BlacklistStore for FailingStore {
    async fn get(&self, _event: &str) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list(&self) -> Result<BTreeMap<String, Vec<String>>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

fn test_app(store: Arc<dyn BlacklistStore>) -> axum::Router {
    scio_backend::router(AppState::new(store, "https://scio.test"))
}

async fn get_response(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn unknown_event_returns_empty_blacklist() {
    let app = test_app(Arc::new(BlacklistStoreInMemory::new()));

    let (status, body) = get_response(app, "/api/report/blacklist?event=astronomy").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: BlacklistResponse = serde_json::from_slice(&body).unwrap();
    assert!(parsed.blacklist.is_empty());
}

#[tokio::test]
async fn stored_blacklist_is_returned_unchanged() {
    let store = BlacklistStoreInMemory::new();
    let questions = vec!["q-17".to_string(), "q-3".to_string(), "q-99".to_string()];
    store.insert("anatomy", questions.clone());
    let app = test_app(Arc::new(store));

    let (status, body) = get_response(app, "/api/report/blacklist?event=anatomy").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: BlacklistResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed.blacklist, questions);
}

#[tokio::test]
async fn listing_aggregates_every_stored_event() {
    let store = BlacklistStoreInMemory::new();
    store.insert("anatomy", vec!["q-1".to_string(), "q-2".to_string()]);
    store.insert("codebusters", vec!["c-9".to_string()]);
    let app = test_app(Arc::new(store));

    let (status, body) = get_response(app, "/api/report/blacklist").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: BlacklistsResponse = serde_json::from_slice(&body).unwrap();
    let events: Vec<String> = parsed.blacklists.keys().cloned().collect();
    assert_eq!(events, ["anatomy", "codebusters"]);
    assert_eq!(
        parsed.blacklists["anatomy"],
        vec!["q-1".to_string(), "q-2".to_string()]
    );
    assert_eq!(parsed.blacklists["codebusters"], vec!["c-9".to_string()]);
}

#[tokio::test]
async fn store_failure_surfaces_as_fixed_500_body() {
    for uri in ["/api/report/blacklist?event=anatomy", "/api/report/blacklist"] {
        let app = test_app(Arc::new(FailingStore));

        let (status, body) = get_response(app, uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "Failed to retrieve blacklist");
    }
}

#[tokio::test]
async fn health_reports_store_status() {
    let app = test_app(Arc::new(BlacklistStoreInMemory::new()));

    let (status, body) = get_response(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed.status, HealthStatus::Healthy);
    assert_eq!(parsed.services.blacklists, "up");
}

#[tokio::test]
async fn health_degrades_when_store_is_down() {
    let app = test_app(Arc::new(FailingStore));

    let (status, body) = get_response(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed.status, HealthStatus::Degraded);
    assert_eq!(parsed.services.blacklists, "down");
}

#[tokio::test]
async fn robots_txt_carries_the_crawl_rules() {
    let app = test_app(Arc::new(BlacklistStoreInMemory::new()));

    let (status, body) = get_response(app, "/robots.txt").await;

    assert_eq!(status, StatusCode::OK);
    let body = String::from_utf8(body).unwrap();
    assert!(body.contains("Allow: /\n"));
    assert!(body.contains("Disallow: /json\n"));
    assert!(body.contains("Sitemap: https://scio.test/sitemap.xml"));
}

#[tokio::test]
async fn sitemap_xml_lists_the_fixed_urls() {
    let app = test_app(Arc::new(BlacklistStoreInMemory::new()));

    let (status, body) = get_response(app, "/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    let body = String::from_utf8(body).unwrap();
    assert!(body.contains("<loc>https://scio.test/</loc>"));
    assert!(body.contains("<loc>https://scio.test/practice</loc>"));
    assert!(body.contains("<loc>https://scio.test/dashboard</loc>"));
}
