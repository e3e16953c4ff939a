//! Booking lifecycle.

pub mod service;
pub mod view;

pub use service::{BookingService, NewBookingInput, PaymentInput};
pub use view::BookingDetails;
