use std::{env, fmt::Display, str::FromStr};

use scio::log::{info, warn};

/// Base URL the sitemap and robots endpoints advertise when none is
/// configured.
pub const DEFAULT_SITE_URL: &str = "https://scio.app";

pub struct Config {
    pub port: u16,
    pub redis_url: Option<String>,
    pub site_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("SCIO_PORT", "3030"),
            redis_url: env::var("REDIS_URL").ok(),
            site_url: try_load("SCIO_SITE_URL", DEFAULT_SITE_URL),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
