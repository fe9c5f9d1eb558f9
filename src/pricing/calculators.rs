//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no database access, no I/O.
//! Every quote in the service (API preview, booking payload) goes through
//! `compute_quote`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::pricing::config::PricingConfig;

pub const MIN_BAGS: u32 = 1;
pub const MAX_BAGS: u32 = 10;
pub const MIN_STORAGE_DAYS: u32 = 1;
pub const MAX_STORAGE_DAYS: u32 = 30;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use luggageguard_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Round to cents and fix the scale at two places, so `45` serializes as `"45.00"`.
pub fn to_cents(amount: Decimal) -> Decimal {
    let mut cents = round_money(amount, 2);
    cents.rescale(2);
    cents
}

/// Bag count and storage days that are known to be within bounds.
///
/// Only constructible through `QuoteInput::new`, so `compute_quote` never sees
/// an out-of-range request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteInput {
    number_of_bags: u32,
    storage_days: u32,
}

/// Which field of a quote request was out of bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteInputError {
    NumberOfBags(i64),
    StorageDays(i64),
}

impl std::fmt::Display for QuoteInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteInputError::NumberOfBags(n) => write!(
                f,
                "numberOfBags must be between {} and {} (got {})",
                MIN_BAGS, MAX_BAGS, n
            ),
            QuoteInputError::StorageDays(n) => write!(
                f,
                "storageDays must be between {} and {} (got {})",
                MIN_STORAGE_DAYS, MAX_STORAGE_DAYS, n
            ),
        }
    }
}

impl QuoteInput {
    /// Validate both counts, reporting every violation.
    pub fn new(number_of_bags: i64, storage_days: i64) -> Result<Self, Vec<QuoteInputError>> {
        let mut errors = Vec::new();

        let bags = u32::try_from(number_of_bags)
            .ok()
            .filter(|n| (MIN_BAGS..=MAX_BAGS).contains(n));
        if bags.is_none() {
            errors.push(QuoteInputError::NumberOfBags(number_of_bags));
        }

        let days = u32::try_from(storage_days)
            .ok()
            .filter(|n| (MIN_STORAGE_DAYS..=MAX_STORAGE_DAYS).contains(n));
        if days.is_none() {
            errors.push(QuoteInputError::StorageDays(storage_days));
        }

        match (bags, days) {
            (Some(number_of_bags), Some(storage_days)) => Ok(Self {
                number_of_bags,
                storage_days,
            }),
            _ => Err(errors),
        }
    }

    pub fn number_of_bags(&self) -> u32 {
        self.number_of_bags
    }

    pub fn storage_days(&self) -> u32 {
        self.storage_days
    }
}

/// One labeled line of a quote breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

/// Result of a quote calculation. Amounts are exact; round at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteResult {
    pub number_of_bags: u32,
    pub storage_days: u32,
    pub base_price: Decimal,
    pub storage_price: Decimal,
    pub subtotal: Decimal,
    pub multi_day_discount: Decimal,
    pub multi_bag_discount: Decimal,
    pub total_discount: Decimal,
    pub total: Decimal,
    pub breakdown: Vec<LineItem>,
}

/// Rate of the highest tier whose `min_days` is reached, or zero.
///
/// Does not rely on tier order.
pub fn multi_day_discount_rate(config: &PricingConfig, storage_days: u32) -> Decimal {
    config
        .multi_day_discount_tiers
        .iter()
        .filter(|tier| tier.min_days <= storage_days)
        .max_by_key(|tier| tier.min_days)
        .map(|tier| tier.discount_rate)
        .unwrap_or(Decimal::ZERO)
}

pub fn multi_bag_discount_rate(config: &PricingConfig, number_of_bags: u32) -> Decimal {
    if number_of_bags >= config.multi_bag_discount_threshold {
        config.multi_bag_discount_rate
    } else {
        Decimal::ZERO
    }
}

/// Compute a quote.
///
/// Both discounts are taken against the full subtotal and summed; they are
/// not chained. The total is clamped at zero for configs whose rates add up
/// past 100%.
pub fn compute_quote(input: &QuoteInput, config: &PricingConfig) -> QuoteResult {
    let bags = Decimal::from(input.number_of_bags);
    let days = Decimal::from(input.storage_days);

    let base_price = bags * config.base_price_per_bag;
    let storage_price = bags * days * config.price_per_day_per_bag;
    let subtotal = base_price + storage_price;

    let multi_day_discount = subtotal * multi_day_discount_rate(config, input.storage_days);
    let multi_bag_discount = subtotal * multi_bag_discount_rate(config, input.number_of_bags);
    let total_discount = multi_day_discount + multi_bag_discount;

    let total = (subtotal - total_discount).max(Decimal::ZERO);

    let mut breakdown = vec![
        LineItem {
            label: format!("Base price ({})", pluralize(input.number_of_bags, "bag")),
            amount: base_price,
        },
        LineItem {
            label: format!("Storage ({})", pluralize(input.storage_days, "day")),
            amount: storage_price,
        },
    ];
    if total_discount > Decimal::ZERO {
        breakdown.push(LineItem {
            label: "Discount".to_string(),
            amount: -total_discount,
        });
    }

    QuoteResult {
        number_of_bags: input.number_of_bags,
        storage_days: input.storage_days,
        base_price,
        storage_price,
        subtotal,
        multi_day_discount,
        multi_bag_discount,
        total_discount,
        total,
        breakdown,
    }
}

/// "1 bag", "3 bags"
pub fn pluralize(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Format an amount for display, e.g. `$1,234.50`.
///
/// Rounds to cents with banker's rounding. Unknown currency codes are
/// written as a prefix (`CAD 12.00`).
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let rounded = round_money(amount, 2);
    let negative = rounded < Decimal::ZERO;

    let mut abs = rounded.abs();
    abs.rescale(2);
    let digits = abs.to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let prefix = match currency.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "MXN" => "MX$".to_string(),
        other => format!("{} ", other),
    };

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        prefix,
        grouped,
        cents
    )
}
