//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::AuthUser;
pub use json::JsonBody;
pub use path::{parse_booking_id, parse_destination_id, parse_user_id};
