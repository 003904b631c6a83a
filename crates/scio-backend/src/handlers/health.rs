use std::sync::Arc;

use axum::{Json, extract::State};
use scio::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use scio::log;

fn uptime_seconds(started_at: chrono::DateTime<chrono::Utc>) -> i64 {
    (chrono::Utc::now() - started_at).num_seconds()
}

fn human_readable_uptime(started_at: chrono::DateTime<chrono::Utc>) -> String {
    let uptime_duration: chrono::TimeDelta = chrono::Utc::now().signed_duration_since(started_at);

    let uptime_seconds = uptime_duration.num_seconds();
    let days = uptime_duration.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> (i64, String) {
    let seconds = uptime_seconds(started_at);
    let human = human_readable_uptime(started_at);
    (seconds, human)
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let (status, store_status, tracked_events) = match state.blacklists.list().await {
        Ok(blacklists) => (HealthStatus::Healthy, "up".to_string(), blacklists.len()),
        Err(err) => {
            log::warn!("Blacklist store unreachable during health check: {err}");
            (HealthStatus::Degraded, "down".to_string(), 0)
        }
    };
    let (seconds, human) = service_uptime(state.started_at);

    let health_response = HealthResponse {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: UptimeInfo { seconds, human },
        services: ServiceInfo {
            blacklists: store_status,
            tracked_events,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formats_scale_with_duration() {
        let now = chrono::Utc::now();

        assert_eq!(human_readable_uptime(now - chrono::Duration::seconds(42)), "42s");
        assert_eq!(
            human_readable_uptime(now - chrono::Duration::seconds(3 * 60 + 5)),
            "3m 5s"
        );
        assert_eq!(
            human_readable_uptime(now - chrono::Duration::hours(2) - chrono::Duration::seconds(1)),
            "2h 0m 1s"
        );
        assert!(
            human_readable_uptime(now - chrono::Duration::days(3)).starts_with("3d")
        );
    }
}
