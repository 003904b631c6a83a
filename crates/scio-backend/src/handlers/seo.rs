use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

use crate::seo;

/// Handler for `GET /robots.txt`.
pub async fn robots(State(state): State<Arc<crate::AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::render_robots(&state.site_url),
    )
}

/// Handler for `GET /sitemap.xml`.
pub async fn sitemap(State(state): State<Arc<crate::AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        seo::render_sitemap(&state.site_url),
    )
}
