use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::services::BlacklistStore;

/// Shared state handed to every request handler.
pub struct AppState {
    pub blacklists: Arc<dyn BlacklistStore>,
    pub site_url: String,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(blacklists: Arc<dyn BlacklistStore>, site_url: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            blacklists,
            site_url: site_url.into(),
            started_at: Utc::now(),
        })
    }
}
