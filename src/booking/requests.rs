//! Booking form submission DTO.

use chrono::NaiveDate;
use serde::Deserialize;

use super::schedule::is_valid_time_slot;
use crate::pricing::calculators::QuoteInput;
use crate::pricing::PricingError;

/// What the three-step booking form collects
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    // Step 1: pickup
    pub pickup_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub pickup_date: NaiveDate,
    pub pickup_time_slot: String,
    pub number_of_bags: i64,

    // Step 2: delivery
    pub storage_days: i64,
    pub delivery_address: String,
    pub delivery_lat: f64,
    pub delivery_lng: f64,
    pub delivery_date: NaiveDate,
    pub delivery_time_slot: String,

    // Step 3: additional
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub promo_code: Option<String>,
}

impl BookingDraft {
    /// Check every field and return the priced input, or all violations.
    ///
    /// `today` is the earliest pickup date the form offers.
    pub fn validate(&self, today: NaiveDate) -> Result<QuoteInput, PricingError> {
        let mut errors = Vec::new();

        if self.pickup_address.trim().is_empty() {
            errors.push("pickupAddress is required".to_string());
        }
        if self.delivery_address.trim().is_empty() {
            errors.push("deliveryAddress is required".to_string());
        }

        check_coordinates("pickup", self.pickup_lat, self.pickup_lng, &mut errors);
        check_coordinates("delivery", self.delivery_lat, self.delivery_lng, &mut errors);

        if !is_valid_time_slot(&self.pickup_time_slot) {
            errors.push(format!("Unknown pickupTimeSlot: {}", self.pickup_time_slot));
        }
        if !is_valid_time_slot(&self.delivery_time_slot) {
            errors.push(format!(
                "Unknown deliveryTimeSlot: {}",
                self.delivery_time_slot
            ));
        }

        if self.pickup_date < today {
            errors.push(format!(
                "pickupDate {} must not be in the past",
                self.pickup_date
            ));
        }
        if self.delivery_date < self.pickup_date {
            errors.push(format!(
                "deliveryDate {} is before pickupDate {}",
                self.delivery_date, self.pickup_date
            ));
        }

        let input = QuoteInput::new(self.number_of_bags, self.storage_days);
        if let Err(input_errors) = &input {
            errors.extend(input_errors.iter().map(ToString::to_string));
        }

        match input {
            Ok(input) if errors.is_empty() => Ok(input),
            _ => Err(PricingError::Validation {
                message: "Invalid booking".to_string(),
                errors,
            }),
        }
    }
}

fn check_coordinates(which: &str, lat: f64, lng: f64, errors: &mut Vec<String>) {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        errors.push(format!("{}Lat must be between -90 and 90", which));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        errors.push(format!("{}Lng must be between -180 and 180", which));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    pub(crate) fn draft() -> BookingDraft {
        BookingDraft {
            pickup_address: "Av. Reforma 222, CDMX".to_string(),
            pickup_lat: 19.4326,
            pickup_lng: -99.1332,
            pickup_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            pickup_time_slot: "08:00-10:00".to_string(),
            number_of_bags: 3,
            storage_days: 7,
            delivery_address: "Terminal 1, AICM".to_string(),
            delivery_lat: 19.4361,
            delivery_lng: -99.0719,
            delivery_date: NaiveDate::from_ymd_opt(2026, 11, 9).unwrap(),
            delivery_time_slot: "16:00-18:00".to_string(),
            special_instructions: None,
            promo_code: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        let input = draft().validate(today()).unwrap();
        assert_eq!(input.number_of_bags(), 3);
        assert_eq!(input.storage_days(), 7);
    }

    #[test]
    fn test_deserialize_form_json() {
        let json = r#"{
            "pickupAddress": "Hotel Centro",
            "pickupLat": 19.43,
            "pickupLng": -99.13,
            "pickupDate": "2026-11-02",
            "pickupTimeSlot": "10:00-12:00",
            "numberOfBags": 2,
            "storageDays": 3,
            "deliveryAddress": "Airport",
            "deliveryLat": 19.44,
            "deliveryLng": -99.07,
            "deliveryDate": "2026-11-05",
            "deliveryTimeSlot": "12:00-14:00",
            "promoCode": "WELCOME"
        }"#;
        let draft: BookingDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.pickup_date, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap());
        assert_eq!(draft.promo_code.as_deref(), Some("WELCOME"));
        assert!(draft.special_instructions.is_none());
        assert!(draft.validate(today()).is_ok());
    }

    #[test]
    fn test_same_day_delivery_is_allowed() {
        let mut d = draft();
        d.delivery_date = d.pickup_date;
        assert!(d.validate(today()).is_ok());
    }

    #[test]
    fn test_pickup_in_the_past_is_rejected() {
        let mut d = draft();
        d.pickup_date = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();

        match d.validate(today()) {
            Err(PricingError::Validation { errors, .. }) => {
                assert_eq!(errors, vec!["pickupDate 2001-01-01 must not be in the past"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_pickup_today_is_allowed() {
        let mut d = draft();
        d.pickup_date = today();
        assert!(d.validate(today()).is_ok());
    }

    #[test]
    fn test_collects_every_violation() {
        let mut d = draft();
        d.pickup_address = "  ".to_string();
        d.delivery_lat = 120.0;
        d.pickup_time_slot = "07:00-08:00".to_string();
        d.delivery_date = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        d.number_of_bags = 0;
        d.storage_days = 31;

        match d.validate(today()) {
            Err(PricingError::Validation { message, errors }) => {
                assert_eq!(message, "Invalid booking");
                assert_eq!(errors.len(), 6);
                assert_eq!(errors[0], "pickupAddress is required");
                assert_eq!(errors[1], "deliveryLat must be between -90 and 90");
                assert!(errors[2].contains("pickupTimeSlot"));
                assert!(errors[3].contains("before pickupDate"));
                assert!(errors[4].starts_with("numberOfBags"));
                assert!(errors[5].starts_with("storageDays"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_coordinates() {
        let mut d = draft();
        d.pickup_lng = f64::NAN;
        assert!(d.validate(today()).is_err());
    }
}
