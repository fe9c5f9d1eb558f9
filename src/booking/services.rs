//! Booking payload assembly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::requests::BookingDraft;
use crate::pricing::calculators::{compute_quote, to_cents, QuoteResult};
use crate::pricing::config::PricingConfig;
use crate::pricing::PricingError;

/// Body the booking form sends to the backend's booking-creation endpoint.
///
/// The four price fields are what the backend stores on the booking record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub pickup_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub pickup_date: DateTime<Utc>,
    pub pickup_time_slot: String,
    pub number_of_bags: u32,
    pub storage_days: u32,
    pub delivery_address: String,
    pub delivery_lat: f64,
    pub delivery_lng: f64,
    pub delivery_date: DateTime<Utc>,
    pub delivery_time_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub storage_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_applied: Decimal,
}

/// Validate a draft and attach prices computed with `config`.
///
/// Returns the payload together with the full quote for display. Pickup
/// dates before `today` are rejected.
pub fn build_booking_payload(
    draft: BookingDraft,
    config: &PricingConfig,
    today: NaiveDate,
) -> Result<(BookingPayload, QuoteResult), PricingError> {
    let input = draft.validate(today)?;
    let quote = compute_quote(&input, config);

    debug!(
        bags = quote.number_of_bags,
        days = quote.storage_days,
        total = %quote.total,
        "Priced booking draft"
    );

    let payload = BookingPayload {
        pickup_address: draft.pickup_address.trim().to_string(),
        pickup_lat: draft.pickup_lat,
        pickup_lng: draft.pickup_lng,
        pickup_date: start_of_day(draft.pickup_date),
        pickup_time_slot: draft.pickup_time_slot,
        number_of_bags: quote.number_of_bags,
        storage_days: quote.storage_days,
        delivery_address: draft.delivery_address.trim().to_string(),
        delivery_lat: draft.delivery_lat,
        delivery_lng: draft.delivery_lng,
        delivery_date: start_of_day(draft.delivery_date),
        delivery_time_slot: draft.delivery_time_slot,
        special_instructions: non_blank(draft.special_instructions),
        promo_code: non_blank(draft.promo_code),
        base_price: to_cents(quote.base_price),
        storage_price: to_cents(quote.storage_price),
        total_price: to_cents(quote.total),
        discount_applied: to_cents(quote.total_discount),
    };

    Ok((payload, quote))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
