//! Context providers for shared application state and services.

pub mod api;
pub mod theme;

pub use theme::{ThemeContext, ThemeProvider, use_theme};
