//! Page route handlers

use askama::Template;
use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::pricing::table::{PricingRow, PricingTable};
use crate::AppState;

/// Marketing pricing page template
#[derive(Template)]
#[template(path = "pricing.html")]
struct PricingPageTemplate {
    currency: String,
    rates: Vec<PricingRow>,
    discounts: Vec<PricingRow>,
    has_discounts: bool,
}

/// Pricing page, rendered from the active pricing config
pub async fn pricing(State(state): State<AppState>) -> Result<Html<String>> {
    let config = state.active_pricing().await;
    let table = PricingTable::from_config(&config, state.currency());

    let template = PricingPageTemplate {
        currency: state.currency().to_string(),
        has_discounts: !table.discounts.is_empty(),
        rates: table.rates,
        discounts: table.discounts,
    };

    Ok(Html(template.render()?))
}

/// Liveness plus cache state
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let stats = state.cache.stats();
    Json(json!({
        "status": "ok",
        "database_configured": state.db.is_some(),
        "pricing_config_cached": stats.pricing_config_cached,
    }))
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
