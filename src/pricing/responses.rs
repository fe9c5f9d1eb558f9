//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{format_currency, to_cents, LineItem, QuoteResult};
use super::config::PricingConfig;
use super::table::PricingTable;

/// Money value for JSON responses, rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub display: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        let amount = to_cents(amount);
        Self {
            amount,
            currency: currency.to_string(),
            display: format_currency(amount, currency),
        }
    }
}

/// A breakdown line in a quote response
#[derive(Debug, Clone, Serialize)]
pub struct LineItemResponse {
    pub label: String,
    pub amount: MoneyResponse,
}

impl LineItemResponse {
    fn from_line(line: &LineItem, currency: &str) -> Self {
        Self {
            label: line.label.clone(),
            amount: MoneyResponse::new(line.amount, currency),
        }
    }
}

/// Response for a quote calculation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub number_of_bags: u32,
    pub storage_days: u32,
    pub base_price: MoneyResponse,
    pub storage_price: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub multi_day_discount: MoneyResponse,
    pub multi_bag_discount: MoneyResponse,
    pub discount: MoneyResponse,
    pub total: MoneyResponse,
    pub breakdown: Vec<LineItemResponse>,
}

impl QuoteResponse {
    pub fn from_result(quote: &QuoteResult, currency: &str) -> Self {
        Self {
            number_of_bags: quote.number_of_bags,
            storage_days: quote.storage_days,
            base_price: MoneyResponse::new(quote.base_price, currency),
            storage_price: MoneyResponse::new(quote.storage_price, currency),
            subtotal: MoneyResponse::new(quote.subtotal, currency),
            multi_day_discount: MoneyResponse::new(quote.multi_day_discount, currency),
            multi_bag_discount: MoneyResponse::new(quote.multi_bag_discount, currency),
            discount: MoneyResponse::new(quote.total_discount, currency),
            total: MoneyResponse::new(quote.total, currency),
            breakdown: quote
                .breakdown
                .iter()
                .map(|line| LineItemResponse::from_line(line, currency))
                .collect(),
        }
    }
}

/// Response for the active pricing configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfigResponse {
    pub currency: String,
    #[serde(flatten)]
    pub config: PricingConfig,
}

/// Response for the marketing pricing table
#[derive(Debug, Clone, Serialize)]
pub struct PricingTableResponse {
    pub currency: String,
    #[serde(flatten)]
    pub table: PricingTable,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::{compute_quote, QuoteInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_response_rounds_to_cents() {
        let money = MoneyResponse::new(dec!(10.655), "USD");
        assert_eq!(money.amount, dec!(10.66));
        assert_eq!(money.display, "$10.66");

        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["amount"], "10.66");
        assert_eq!(json["currency"], "USD");
    }

    #[test]
    fn test_money_response_always_has_two_places() {
        let json = serde_json::to_value(MoneyResponse::new(dec!(30), "USD")).unwrap();
        assert_eq!(json["amount"], "30.00");
        let json = serde_json::to_value(MoneyResponse::new(dec!(0), "USD")).unwrap();
        assert_eq!(json["amount"], "0.00");
    }

    #[test]
    fn test_quote_response_shape() {
        let input = QuoteInput::new(3, 7).unwrap();
        let quote = compute_quote(&input, &PricingConfig::default());
        let json = serde_json::to_value(QuoteResponse::from_result(&quote, "USD")).unwrap();

        assert_eq!(json["numberOfBags"], 3);
        assert_eq!(json["storageDays"], 7);
        assert_eq!(json["basePrice"]["amount"], "45.00");
        assert_eq!(json["subtotal"]["amount"], "213.00");
        assert_eq!(json["discount"]["amount"], "42.60");
        assert_eq!(json["total"]["amount"], "170.40");
        assert_eq!(json["total"]["display"], "$170.40");
        assert_eq!(json["breakdown"].as_array().unwrap().len(), 3);
        assert_eq!(json["breakdown"][2]["label"], "Discount");
        assert_eq!(json["breakdown"][2]["amount"]["display"], "-$42.60");
    }

    #[test]
    fn test_config_response_flattens_config() {
        let response = PricingConfigResponse {
            currency: "USD".to_string(),
            config: PricingConfig::default(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["basePricePerBag"], "15");
        assert_eq!(json["multiBagDiscountRate"], "0.05");
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let response = PricingErrorResponse {
            error_type: "validation_error".to_string(),
            message: "bad".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }
}
