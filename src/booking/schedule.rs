//! Pickup and delivery time slots.

use serde::Serialize;

/// Two-hour windows offered for pickup and delivery, as `(value, label)`
const SLOTS: [(&str, &str); 6] = [
    ("08:00-10:00", "8:00 AM - 10:00 AM"),
    ("10:00-12:00", "10:00 AM - 12:00 PM"),
    ("12:00-14:00", "12:00 PM - 2:00 PM"),
    ("14:00-16:00", "2:00 PM - 4:00 PM"),
    ("16:00-18:00", "4:00 PM - 6:00 PM"),
    ("18:00-20:00", "6:00 PM - 8:00 PM"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub value: &'static str,
    pub label: &'static str,
    pub available: bool,
}

pub fn time_slots() -> Vec<TimeSlot> {
    SLOTS
        .iter()
        .map(|&(value, label)| TimeSlot {
            value,
            label,
            available: true,
        })
        .collect()
}

pub fn is_valid_time_slot(value: &str) -> bool {
    SLOTS.iter().any(|(slot, _)| *slot == value)
}
