//! Backend HTTP service for the Scio application.
//!
//! Exposes the blacklist report API, a health endpoint, and the SEO
//! surfaces (`robots.txt`, `sitemap.xml`), all served by axum over a
//! pluggable blacklist store.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod seo;
pub mod services;
pub mod state;

pub use state::AppState;

fn cors(site_url: &str) -> CorsLayer {
    let origins = if cfg!(debug_assertions) {
        let dev_ports = vec![3000, 8000, 8080, 8081, 5173];
        let mut allowed_origins = Vec::new();
        for port in dev_ports {
            allowed_origins.push(format!("http://localhost:{port}"));
            allowed_origins.push(format!("http://127.0.0.1:{port}"));
        }
        allowed_origins
    } else {
        vec![site_url.to_string()]
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
}

/// Builds the application router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors(&state.site_url);

    Router::new()
        .route("/api/report/blacklist", get(handlers::report::blacklist))
        .route("/api/health", get(handlers::health::get))
        .route("/robots.txt", get(handlers::seo::robots))
        .route("/sitemap.xml", get(handlers::seo::sitemap))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
