//! Booking form support.
//!
//! Time slots, status labels, and the pricing fields of the booking payload
//! the form submits to the backend. Prices always come from
//! `pricing::compute_quote`.

pub mod requests;
pub mod routes;
pub mod schedule;
pub mod services;
pub mod status;

pub use routes::router;
pub use schedule::{time_slots, TimeSlot};
pub use status::BookingStatus;
