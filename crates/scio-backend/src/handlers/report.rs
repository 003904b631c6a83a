use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use scio::data::{BlacklistResponse, BlacklistsResponse, ErrorResponse};
use scio::log;

#[derive(Debug, Deserialize)]
pub struct BlacklistQuery {
    pub event: Option<String>,
}

/// Handler for `GET /api/report/blacklist`.
///
/// With an `event` query parameter, returns that event's exclusion list
/// (empty when nothing is stored). Without one, returns every stored
/// blacklist keyed by event name. Any store failure aborts the whole
/// response with the fixed 500 body; there are no partial results.
pub async fn blacklist(
    State(state): State<Arc<crate::AppState>>,
    Query(query): Query<BlacklistQuery>,
) -> Response {
    let result = match query.event {
        Some(event) => state
            .blacklists
            .get(&event)
            .await
            .map(|blacklist| Json(BlacklistResponse { blacklist }).into_response()),
        None => state
            .blacklists
            .list()
            .await
            .map(|blacklists| Json(BlacklistsResponse { blacklists }).into_response()),
    };

    match result {
        Ok(response) => response,
        Err(err) => {
            log::error!("Blacklist lookup failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to retrieve blacklist".to_string(),
                }),
            )
                .into_response()
        }
    }
}
