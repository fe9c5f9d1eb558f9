//! Pricing engine module for LuggageGuard bookings.
//!
//! Quotes for bag storage: a flat fee per bag, a daily fee per bag, and
//! multi-day / multi-bag discounts taken against the subtotal.

pub mod calculators;
pub mod config;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod table;

// Re-export commonly used items
pub use calculators::{compute_quote, round_money, QuoteInput, QuoteResult};
pub use config::{DiscountTier, PricingConfig};
pub use routes::router;
pub use services::PricingError;
