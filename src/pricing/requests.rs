//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::calculators::QuoteInput;
use super::services::PricingError;

/// Request for a price quote (JSON body or query string)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub number_of_bags: i64,
    pub storage_days: i64,
}

impl QuoteRequest {
    /// Reject out-of-range counts instead of clamping them.
    pub fn validate(&self) -> Result<QuoteInput, PricingError> {
        QuoteInput::new(self.number_of_bags, self.storage_days).map_err(|errors| {
            PricingError::Validation {
                message: "Invalid quote request".to_string(),
                errors: errors.iter().map(ToString::to_string).collect(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let req: QuoteRequest =
            serde_json::from_str(r#"{"numberOfBags": 3, "storageDays": 7}"#).unwrap();
        assert_eq!(req.number_of_bags, 3);
        assert_eq!(req.storage_days, 7);
    }

    #[test]
    fn test_validate_ok() {
        let req = QuoteRequest {
            number_of_bags: 10,
            storage_days: 30,
        };
        let input = req.validate().unwrap();
        assert_eq!(input.number_of_bags(), 10);
        assert_eq!(input.storage_days(), 30);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let req = QuoteRequest {
            number_of_bags: 0,
            storage_days: 45,
        };
        match req.validate() {
            Err(PricingError::Validation { errors, .. }) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].starts_with("numberOfBags"));
                assert!(errors[1].starts_with("storageDays"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
