//! Courtside web frontend.
//!
//! Axum server for the Courtside sports club marketing site: serves the
//! booking page and the pricing API behind it, plus static assets.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use crate::cache::AppCache;
use crate::config::AppConfig;
use crate::pricing::schedule::{FlatPeak, PeakSchedule};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub config: Arc<AppConfig>,
    pub schedule: Arc<dyn PeakSchedule>,
}

impl AppState {
    /// Build state with the default (all-peak) schedule
    pub fn new(config: AppConfig) -> Self {
        Self::with_schedule(config, Arc::new(FlatPeak))
    }

    /// Build state with a custom peak schedule
    pub fn with_schedule(config: AppConfig, schedule: Arc<dyn PeakSchedule>) -> Self {
        Self {
            cache: AppCache::new(config.pricing_ttl),
            config: Arc::new(config),
            schedule,
        }
    }
}
