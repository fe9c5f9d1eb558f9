//! Pricing configuration.
//!
//! `PricingConfig::default()` holds the standard LuggageGuard rates. The process
//! builds one config at startup and hands it to every consumer (quotes, booking
//! payloads, the marketing table) so the numbers live in exactly one place.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A multi-day discount tier: `discount_rate` applies once storage reaches `min_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    pub min_days: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_rate: Decimal,
}

impl DiscountTier {
    pub fn new(min_days: u32, discount_rate: Decimal) -> Self {
        Self {
            min_days,
            discount_rate,
        }
    }
}

/// Rates used to price a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Flat fee charged once per bag
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_per_bag: Decimal,
    /// Fee per bag per storage day
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_day_per_bag: Decimal,
    /// Ascending by `min_days`; only the highest qualifying tier applies
    #[serde(default)]
    pub multi_day_discount_tiers: Vec<DiscountTier>,
    pub multi_bag_discount_threshold: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub multi_bag_discount_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price_per_bag: dec!(15),
            price_per_day_per_bag: dec!(8),
            multi_day_discount_tiers: vec![
                DiscountTier::new(3, dec!(0.10)),
                DiscountTier::new(7, dec!(0.15)),
            ],
            multi_bag_discount_threshold: 3,
            multi_bag_discount_rate: dec!(0.05),
        }
    }
}

/// Configuration loading/validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid pricing config: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("Failed to read pricing config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse pricing config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PricingConfig {
    /// Check every invariant and report all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.base_price_per_bag <= Decimal::ZERO {
            errors.push("basePricePerBag must be greater than 0".to_string());
        }
        if self.price_per_day_per_bag <= Decimal::ZERO {
            errors.push("pricePerDayPerBag must be greater than 0".to_string());
        }

        let mut previous: Option<u32> = None;
        for (i, tier) in self.multi_day_discount_tiers.iter().enumerate() {
            if tier.min_days == 0 {
                errors.push(format!("multiDayDiscountTiers[{}].minDays must be at least 1", i));
            }
            if !is_valid_rate(tier.discount_rate) {
                errors.push(format!(
                    "multiDayDiscountTiers[{}].discountRate must be in [0, 1)",
                    i
                ));
            }
            if let Some(prev) = previous {
                if tier.min_days <= prev {
                    errors.push(format!(
                        "multiDayDiscountTiers must be strictly ascending by minDays ({} after {})",
                        tier.min_days, prev
                    ));
                }
            }
            previous = Some(tier.min_days);
        }

        if self.multi_bag_discount_threshold == 0 {
            errors.push("multiBagDiscountThreshold must be at least 1".to_string());
        }
        if !is_valid_rate(self.multi_bag_discount_rate) {
            errors.push("multiBagDiscountRate must be in [0, 1)".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Load a config from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: PricingConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

fn is_valid_rate(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate < Decimal::ONE
}
