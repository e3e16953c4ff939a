//! Booking entities, stay pricing, and the status state machine.

pub mod model;
pub mod pricing;
pub mod status;

pub use model::{Booking, DEFAULT_PAYMENT_METHOD, MAX_TRAVELERS, MIN_TRAVELERS};
pub use pricing::{stay_days, total_price};
pub use status::{BookingStatus, PaymentStatus};
