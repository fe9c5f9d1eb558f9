//! HTTP handlers for the pricing API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::requests::QuoteRequest;
use super::responses::{
    PricingConfigResponse, PricingErrorResponse, PricingTableResponse, QuoteResponse,
};
use super::services::{self, PricingError};
use super::table::PricingTable;
use crate::AppState;

const INVALID_QUOTE: &str = "Invalid quote request";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/config", get(config))
        .route("/api/pricing/table", get(table))
        .route("/api/pricing/quote", get(quote_from_query).post(quote_from_body))
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let status = match &self {
            PricingError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::debug!("Rejected pricing request: {}", self);

        let body = PricingErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.message().to_string(),
            details: Some(serde_json::json!({ "errors": self.errors() })),
        };

        (status, Json(body)).into_response()
    }
}

/// Active pricing configuration
async fn config(State(state): State<AppState>) -> Json<PricingConfigResponse> {
    let config = state.active_pricing().await;
    Json(PricingConfigResponse {
        currency: state.currency().to_string(),
        config: (*config).clone(),
    })
}

/// Rows for the marketing pricing table
async fn table(State(state): State<AppState>) -> Json<PricingTableResponse> {
    let config = state.active_pricing().await;
    Json(PricingTableResponse {
        currency: state.currency().to_string(),
        table: PricingTable::from_config(&config, state.currency()),
    })
}

/// `GET /api/pricing/quote?numberOfBags=3&storageDays=7`
async fn quote_from_query(
    State(state): State<AppState>,
    request: Result<Query<QuoteRequest>, QueryRejection>,
) -> Result<Json<QuoteResponse>, PricingError> {
    let Query(request) = request
        .map_err(|rejection| PricingError::malformed(INVALID_QUOTE, rejection.body_text()))?;
    quote(&state, &request).await
}

/// `POST /api/pricing/quote` with a JSON body
async fn quote_from_body(
    State(state): State<AppState>,
    request: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, PricingError> {
    let Json(request) = request
        .map_err(|rejection| PricingError::malformed(INVALID_QUOTE, rejection.body_text()))?;
    quote(&state, &request).await
}

async fn quote(
    state: &AppState,
    request: &QuoteRequest,
) -> Result<Json<QuoteResponse>, PricingError> {
    let config = state.active_pricing().await;
    let result = services::calculate_quote(&config, request)?;
    Ok(Json(QuoteResponse::from_result(&result, state.currency())))
}
