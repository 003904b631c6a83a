//! HTTP request handlers for the backend API.

pub mod health;
pub mod report;
pub mod seo;
