//! The shared library for Scio, a Rust-based web application for practicing
//! Science Olympiad test questions.
//!
//! This library provides the pieces shared between the frontend and backend:
//! API client plumbing, data transfer types, the theme model, error handling,
//! and logging.

pub mod api;
pub mod data;
pub mod errors;
pub mod log;
pub mod theme;

pub use serde;
pub use serde_json;
pub use tracing;
