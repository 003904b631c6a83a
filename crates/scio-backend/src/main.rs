use std::sync::Arc;

use tokio::signal;

use scio::errors::Report;
use scio::log;
use scio_backend::config::Config;
use scio_backend::services::{BlacklistStore, BlacklistStoreInMemory, BlacklistStoreRedis};
use scio_backend::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    scio::log::setup()?;

    let config = Config::load();

    // Pick the blacklist store: Redis when configured, in-memory otherwise
    let blacklists: Arc<dyn BlacklistStore> = match &config.redis_url {
        Some(url) => Arc::new(BlacklistStoreRedis::connect(url).await?),
        None => {
            log::warn!("REDIS_URL not set, using an empty in-memory blacklist store");
            Arc::new(BlacklistStoreInMemory::new())
        }
    };

    let state = AppState::new(blacklists, config.site_url.clone());
    let app = router(state);

    // Setup the server
    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    log::info!("Starting server on http://{address}");
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Wait for the shutdown signal
    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
