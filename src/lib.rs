//! LuggageGuard pricing service.
//!
//! One pricing engine for the booking form preview, the booking submission
//! payload, and the marketing pricing table. The pricing config is built once
//! at startup and carried in `AppState`; when a database is configured the
//! backend's active config row takes precedence.

pub mod booking;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::cache::AppCache;
use crate::config::AppConfig;
use crate::pricing::PricingConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
    pub cache: AppCache,
    /// Startup pricing config (defaults or `PRICING_CONFIG_PATH`)
    pub pricing: Arc<PricingConfig>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, pricing: PricingConfig, db: Option<PgPool>) -> Self {
        Self {
            db,
            cache: AppCache::new(config.pricing_cache_ttl),
            pricing: Arc::new(pricing),
            config: Arc::new(config),
        }
    }

    /// Config quotes should use right now
    pub async fn active_pricing(&self) -> Arc<PricingConfig> {
        pricing::services::resolve_active_config(self.db.as_ref(), &self.cache, &self.pricing)
            .await
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::pricing))
        .route("/health", get(routes::pages::health))
        .merge(pricing::router())
        .merge(booking::router())
        .fallback(routes::pages::not_found)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
