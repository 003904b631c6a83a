//! Backend services for blacklist retrieval.
//!
//! This module provides the service layer abstraction over the key-value
//! store holding per-event question blacklists, with an in-memory
//! implementation for development and testing and a Redis-backed one for
//! production.

pub mod blacklist;

pub use blacklist::*;
