//! Reusable UI components for the Scio frontend.

pub mod particles;
pub mod theme_toggle;

pub use particles::*;
pub use theme_toggle::*;
