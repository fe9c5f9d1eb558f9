//! Pricing config rows owned by the booking backend.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::pricing::config::{ConfigError, DiscountTier, PricingConfig};

/// PricingConfig from pricing_configs
#[derive(Debug, Clone, FromRow)]
pub struct PricingConfigRecord {
    pub id: Uuid,
    pub base_price_per_bag: Decimal,
    pub price_per_day_per_bag: Decimal,
    /// `[{"days": 3, "discount": 0.10}, ...]`
    pub multi_day_discount_tiers: serde_json::Value,
    pub multi_bag_discount_threshold: i32,
    pub multi_bag_discount_rate: Decimal,
    pub is_active: bool,
    pub effective_from: DateTime<Utc>,
    pub effective_to: Option<DateTime<Utc>>,
}

/// Tier as the backend stores it
#[derive(Debug, Deserialize)]
struct StoredTier {
    days: u32,
    discount: Decimal,
}

impl PricingConfigRecord {
    /// Check if the config applies at the given time
    pub fn is_effective_at(&self, check_time: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        if self.effective_from > check_time {
            return false;
        }
        match self.effective_to {
            Some(end) => check_time < end,
            None => true,
        }
    }

    /// Convert into a validated `PricingConfig`.
    pub fn into_config(self) -> Result<PricingConfig, ConfigError> {
        let stored: Vec<StoredTier> = serde_json::from_value(self.multi_day_discount_tiers)?;

        let threshold = u32::try_from(self.multi_bag_discount_threshold).map_err(|_| {
            ConfigError::Invalid(vec![format!(
                "multiBagDiscountThreshold must be at least 1 (got {})",
                self.multi_bag_discount_threshold
            )])
        })?;

        let config = PricingConfig {
            base_price_per_bag: self.base_price_per_bag,
            price_per_day_per_bag: self.price_per_day_per_bag,
            multi_day_discount_tiers: stored
                .into_iter()
                .map(|t| DiscountTier::new(t.days, t.discount))
                .collect(),
            multi_bag_discount_threshold: threshold,
            multi_bag_discount_rate: self.multi_bag_discount_rate,
        };
        config.validate()?;

        Ok(config)
    }
}
