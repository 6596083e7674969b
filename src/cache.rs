//! In-memory caching using moka
//!
//! Holds the parsed pricing table so quotes do not re-read the document on
//! every computation. The TTL keeps the document editable without a restart.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use tokio::time::interval;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::pricing::models::PricingTable;
use crate::pricing::source;

const PRICING_TABLE_KEY: &str = "pricing-table";

/// Application cache holding the parsed pricing document
#[derive(Clone)]
pub struct AppCache {
    /// Pricing table (singleton entry)
    pub pricing: Cache<String, Arc<PricingTable>>,
}

impl AppCache {
    /// Create a new cache instance with the configured TTL
    pub fn new(pricing_ttl: Duration) -> Self {
        Self {
            pricing: Cache::builder()
                .max_capacity(1)
                .time_to_live(pricing_ttl)
                .build(),
        }
    }

    /// Cached pricing table, if warm
    pub async fn pricing_table(&self) -> Option<Arc<PricingTable>> {
        self.pricing.get(PRICING_TABLE_KEY).await
    }

    /// Store a freshly parsed pricing table
    pub async fn store_pricing_table(&self, table: Arc<PricingTable>) {
        self.pricing.insert(PRICING_TABLE_KEY.to_string(), table).await;
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.pricing.invalidate_all();
        info!("All caches invalidated");
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            pricing_cached: self.pricing.entry_count() > 0,
        }
    }
}

/// Cache statistics for logging and monitoring
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub pricing_cached: bool,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes on the configured TTL cadence.
/// Owned by a spawned task; dropping the task handle stops the loop.
pub async fn start_cache_warmer(cache: AppCache, config: Arc<AppConfig>) {
    warm_cache(&cache, &config).await;

    let mut interval = interval(config.pricing_ttl);
    interval.tick().await; // first tick fires immediately
    loop {
        interval.tick().await;
        warm_cache(&cache, &config).await;
    }
}

/// Warm the cache with the pricing document
async fn warm_cache(cache: &AppCache, config: &AppConfig) {
    match source::load_pricing_table(&config.pricing_path).await {
        Ok(table) => {
            cache.store_pricing_table(Arc::new(table)).await;
            info!("Pricing table cache warmed. Stats: {:?}", cache.stats());
        }
        Err(e) => warn!("Failed to warm pricing table cache: {}", e),
    }
}
