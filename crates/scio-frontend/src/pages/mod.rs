//! Page components for different routes in the application.

pub mod dashboard;
pub mod home;
pub mod practice;

pub use dashboard::*;
pub use home::*;
pub use practice::*;
