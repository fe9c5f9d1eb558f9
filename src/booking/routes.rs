//! HTTP handlers for booking form support.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;

use super::requests::BookingDraft;
use super::schedule::{time_slots, TimeSlot};
use super::services::{build_booking_payload, BookingPayload};
use super::status::BookingStatus;
use crate::pricing::responses::QuoteResponse;
use crate::pricing::PricingError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bookings/time-slots", get(list_time_slots))
        .route("/api/bookings/statuses", get(list_statuses))
        .route("/api/bookings/preview", post(preview))
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    value: BookingStatus,
    label: &'static str,
    active: bool,
}

#[derive(Debug, Serialize)]
struct PreviewResponse {
    payload: BookingPayload,
    quote: QuoteResponse,
}

async fn list_time_slots() -> Json<Vec<TimeSlot>> {
    Json(time_slots())
}

async fn list_statuses() -> Json<Vec<StatusResponse>> {
    Json(
        BookingStatus::ALL
            .into_iter()
            .map(|status| StatusResponse {
                value: status,
                label: status.label(),
                active: status.is_active(),
            })
            .collect(),
    )
}

/// Validate a booking draft and return the payload the form should submit
async fn preview(
    State(state): State<AppState>,
    draft: Result<Json<BookingDraft>, JsonRejection>,
) -> Result<Json<PreviewResponse>, PricingError> {
    let Json(draft) = draft
        .map_err(|rejection| PricingError::malformed("Invalid booking", rejection.body_text()))?;
    let config = state.active_pricing().await;
    let (payload, quote) = build_booking_payload(draft, &config, Utc::now().date_naive())?;

    Ok(Json(PreviewResponse {
        payload,
        quote: QuoteResponse::from_result(&quote, state.currency()),
    }))
}
