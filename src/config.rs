//! Application configuration from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to (`BIND_ADDR`)
    pub bind_addr: String,
    /// Path of the pricing document (`PRICING_DOCUMENT`)
    pub pricing_path: PathBuf,
    /// Directory of static assets served under `/static` (`STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Pricing table cache lifetime (`PRICING_CACHE_TTL_SECS`)
    pub pricing_ttl: Duration,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            pricing_path: env::var("PRICING_DOCUMENT")
                .map(PathBuf::from)
                .unwrap_or(defaults.pricing_path),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            pricing_ttl: env::var("PRICING_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.pricing_ttl),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            pricing_path: PathBuf::from("static/pricing.json"),
            static_dir: PathBuf::from("static"),
            pricing_ttl: Duration::from_secs(10 * 60),
        }
    }
}
