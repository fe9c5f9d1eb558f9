//! Marketing pricing table derived from a `PricingConfig`.
//!
//! The landing page renders these rows instead of hand-typed numbers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::calculators::format_currency;
use super::config::PricingConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingRow {
    pub label: String,
    pub value: String,
}

impl PricingRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingTable {
    pub rates: Vec<PricingRow>,
    pub discounts: Vec<PricingRow>,
}

impl PricingTable {
    pub fn from_config(config: &PricingConfig, currency: &str) -> Self {
        let rates = vec![
            PricingRow::new(
                "Base price per bag",
                format_currency(config.base_price_per_bag, currency),
            ),
            PricingRow::new(
                "Per day per bag",
                format_currency(config.price_per_day_per_bag, currency),
            ),
            PricingRow::new("Pickup & delivery", "FREE"),
        ];

        let mut tiers = config.multi_day_discount_tiers.clone();
        tiers.sort_by_key(|tier| tier.min_days);

        let mut discounts: Vec<PricingRow> = tiers
            .iter()
            .enumerate()
            .filter(|(_, tier)| tier.discount_rate > Decimal::ZERO)
            .map(|(i, tier)| {
                let label = match tiers.get(i + 1) {
                    Some(next) if next.min_days.saturating_sub(1) <= tier.min_days => {
                        format!("{} day storage", tier.min_days)
                    }
                    Some(next) => {
                        format!("{}-{} days storage", tier.min_days, next.min_days - 1)
                    }
                    None => format!("{}+ days storage", tier.min_days),
                };
                PricingRow::new(label, percent_off(tier.discount_rate))
            })
            .collect();

        if config.multi_bag_discount_rate > Decimal::ZERO {
            discounts.push(PricingRow::new(
                format!("{}+ bags", config.multi_bag_discount_threshold),
                percent_off(config.multi_bag_discount_rate),
            ));
        }

        Self { rates, discounts }
    }
}

/// 0.10 -> "10% off", 0.125 -> "12.5% off"
fn percent_off(rate: Decimal) -> String {
    format!("{}% off", (rate * dec!(100)).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::config::DiscountTier;

    #[test]
    fn test_default_table_matches_landing_page() {
        let table = PricingTable::from_config(&PricingConfig::default(), "USD");

        assert_eq!(
            table.rates,
            vec![
                PricingRow::new("Base price per bag", "$15.00"),
                PricingRow::new("Per day per bag", "$8.00"),
                PricingRow::new("Pickup & delivery", "FREE"),
            ]
        );
        assert_eq!(
            table.discounts,
            vec![
                PricingRow::new("3-6 days storage", "10% off"),
                PricingRow::new("7+ days storage", "15% off"),
                PricingRow::new("3+ bags", "5% off"),
            ]
        );
    }

    #[test]
    fn test_table_follows_config_changes() {
        let config = PricingConfig {
            base_price_per_bag: dec!(12.5),
            multi_day_discount_tiers: vec![
                DiscountTier::new(2, dec!(0.05)),
                DiscountTier::new(3, dec!(0.125)),
                DiscountTier::new(10, dec!(0.2)),
            ],
            multi_bag_discount_threshold: 5,
            ..PricingConfig::default()
        };
        let table = PricingTable::from_config(&config, "USD");

        assert_eq!(table.rates[0].value, "$12.50");
        assert_eq!(
            table.discounts,
            vec![
                PricingRow::new("2 day storage", "5% off"),
                PricingRow::new("3-9 days storage", "12.5% off"),
                PricingRow::new("10+ days storage", "20% off"),
                PricingRow::new("5+ bags", "5% off"),
            ]
        );
    }

    #[test]
    fn test_zero_rate_rows_are_hidden() {
        let config = PricingConfig {
            multi_day_discount_tiers: vec![],
            multi_bag_discount_rate: dec!(0),
            ..PricingConfig::default()
        };
        let table = PricingTable::from_config(&config, "USD");
        assert!(table.discounts.is_empty());
        assert_eq!(table.rates.len(), 3);
    }
}
