//! Data structures used between the frontend and backend of the Scio application.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response body for a single event's blacklist lookup.
///
/// The list is the ordered sequence of question identifiers excluded from the
/// event; an event with no stored blacklist yields an empty list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlacklistResponse {
    pub blacklist: Vec<String>,
}

/// Response body aggregating every stored blacklist, keyed by event name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlacklistsResponse {
    pub blacklists: BTreeMap<String, Vec<String>>,
}

/// Fixed-shape failure body returned by the API on any server-side error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

/// Per-service status included in the health response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub blacklists: String,
    pub tracked_events: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}
