//! In-memory caching using moka
//!
//! Holds the active pricing config so quotes don't hit the database on every
//! keystroke of the booking form.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::pricing::config::PricingConfig;
use crate::pricing::services;

/// Application cache
#[derive(Clone)]
pub struct AppCache {
    /// Resolved pricing configs (ACTIVE_CONFIG_KEY -> PricingConfig)
    pub pricing_configs: Cache<String, Arc<PricingConfig>>,
}

impl AppCache {
    pub const ACTIVE_CONFIG_KEY: &'static str = "pricing:active";

    /// Create a new cache whose entries expire after `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            pricing_configs: Cache::builder()
                .max_capacity(8)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            pricing_configs_size: self.pricing_configs.entry_count(),
            pricing_config_cached: self.pricing_configs.contains_key(Self::ACTIVE_CONFIG_KEY),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.pricing_configs.invalidate_all();
        info!("All caches invalidated");
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub pricing_configs_size: u64,
    pub pricing_config_cached: bool,
}

/// Start background pricing config refresher
///
/// Loads the active config on startup and reloads it every `every`.
pub async fn start_config_refresher(
    cache: AppCache,
    db: PgPool,
    fallback: Arc<PricingConfig>,
    every: Duration,
) {
    let mut interval = interval(every);
    loop {
        interval.tick().await;
        refresh_config(&cache, &db, &fallback).await;
    }
}

/// Replace the cached active config with a fresh read
async fn refresh_config(cache: &AppCache, db: &PgPool, fallback: &Arc<PricingConfig>) {
    let config = match services::load_active_config(db).await {
        Some(config) => Arc::new(config),
        None => Arc::clone(fallback),
    };

    cache
        .pricing_configs
        .insert(AppCache::ACTIVE_CONFIG_KEY.to_string(), config)
        .await;

    info!("Pricing config refreshed. Stats: {:?}", cache.stats());
}
