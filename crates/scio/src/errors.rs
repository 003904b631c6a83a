//! Shared error types and utilities for the scio project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures raised by the blacklist key-value store.
///
/// The taxonomy exists for operator-facing logs; the HTTP boundary collapses
/// every variant into the same fixed 500 response.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Key-value store unavailable: {0}")]
    Unavailable(String),
    #[error("Malformed entry under key {key}")]
    MalformedEntry { key: String },
}
