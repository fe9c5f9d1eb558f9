//! Pricing service functions.
//!
//! Resolve the active pricing config (cache, then database, then the startup
//! config) and run quotes against it. A quote can always be produced: lookup
//! failures fall back to the startup config.

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::cache::AppCache;
use crate::db;

use super::calculators::{compute_quote, QuoteResult};
use super::config::PricingConfig;
use super::requests::QuoteRequest;

/// Pricing error types
#[derive(Debug, Clone)]
pub enum PricingError {
    /// Caller input out of bounds or malformed; one entry per violation
    Validation {
        message: String,
        errors: Vec<String>,
    },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::Validation { message, errors } => {
                write!(f, "{}: {}", message, errors.join("; "))
            }
        }
    }
}

impl std::error::Error for PricingError {}

impl PricingError {
    /// A request body or query string that could not be parsed at all
    pub fn malformed(message: impl Into<String>, detail: impl Into<String>) -> Self {
        PricingError::Validation {
            message: message.into(),
            errors: vec![detail.into()],
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::Validation { .. } => "validation_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PricingError::Validation { message, .. } => message,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            PricingError::Validation { errors, .. } => errors,
        }
    }
}

/// Resolve the pricing config quotes should use right now.
///
/// # Arguments
/// * `pool` - Optional database pool; without one the fallback is always used
/// * `cache` - Application cache holding the last resolved config
/// * `fallback` - Config built at startup (defaults or file)
pub async fn resolve_active_config(
    pool: Option<&PgPool>,
    cache: &AppCache,
    fallback: &Arc<PricingConfig>,
) -> Arc<PricingConfig> {
    if let Some(cached) = cache.pricing_configs.get(AppCache::ACTIVE_CONFIG_KEY).await {
        debug!("Cache HIT for active pricing config");
        return cached;
    }

    let Some(pool) = pool else {
        return Arc::clone(fallback);
    };

    debug!("Cache MISS for active pricing config");
    let resolved = match load_active_config(pool).await {
        Some(config) => Arc::new(config),
        None => Arc::clone(fallback),
    };

    cache
        .pricing_configs
        .insert(AppCache::ACTIVE_CONFIG_KEY.to_string(), Arc::clone(&resolved))
        .await;

    resolved
}

/// Read and validate the active config row. `None` means "use the fallback".
pub async fn load_active_config(pool: &PgPool) -> Option<PricingConfig> {
    let record = match db::get_active_pricing_config(pool, Utc::now()).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            debug!("No active pricing config row, using startup config");
            return None;
        }
        Err(e) => {
            warn!("Failed to load pricing config: {}", e);
            return None;
        }
    };

    let id = record.id;
    match record.into_config() {
        Ok(config) => {
            debug!("Loaded pricing config {}", id);
            Some(config)
        }
        Err(e) => {
            warn!("Ignoring pricing config {}: {}", id, e);
            None
        }
    }
}

/// Validate a quote request and price it with `config`.
pub fn calculate_quote(
    config: &PricingConfig,
    request: &QuoteRequest,
) -> Result<QuoteResult, PricingError> {
    let input = request.validate()?;
    let quote = compute_quote(&input, config);

    debug!(
        bags = quote.number_of_bags,
        days = quote.storage_days,
        total = %quote.total,
        "Computed quote"
    );

    Ok(quote)
}
