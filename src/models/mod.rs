//! Database models

pub mod pricing_config;

pub use pricing_config::PricingConfigRecord;
