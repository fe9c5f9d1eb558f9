//! Booking lifecycle status as the backend reports it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    PickedUp,
    InStorage,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 7] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::PickedUp,
        BookingStatus::InStorage,
        BookingStatus::OutForDelivery,
        BookingStatus::Delivered,
        BookingStatus::Cancelled,
    ];

    /// Wire name, e.g. `PICKED_UP`
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::PickedUp => "PICKED_UP",
            BookingStatus::InStorage => "IN_STORAGE",
            BookingStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            BookingStatus::Delivered => "DELIVERED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human label, e.g. `Picked Up`
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::PickedUp => "Picked Up",
            BookingStatus::InStorage => "In Storage",
            BookingStatus::OutForDelivery => "Out for Delivery",
            BookingStatus::Delivered => "Delivered",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Still in progress (neither delivered nor cancelled)
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Delivered | BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown booking status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>(), Ok(status));
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::String(status.to_string())
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(BookingStatus::OutForDelivery.label(), "Out for Delivery");
        assert_eq!(BookingStatus::PickedUp.label(), "Picked Up");
    }

    #[test]
    fn test_unknown_status() {
        assert_eq!(
            "LOST".parse::<BookingStatus>(),
            Err(UnknownStatus("LOST".to_string()))
        );
    }

    #[test]
    fn test_is_active() {
        assert!(BookingStatus::InStorage.is_active());
        assert!(!BookingStatus::Delivered.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }
}
