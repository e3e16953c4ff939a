//! Typed path parameter helpers.

use std::str::FromStr;

use travelhub_core::error::AppError;
use travelhub_core::types::{BookingId, DestinationId, UserId};

fn parse<T: FromStr>(kind: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid {kind} id: {raw}")))
}

/// Parses a destination ID from a path segment.
pub fn parse_destination_id(raw: &str) -> Result<DestinationId, AppError> {
    parse("destination", raw)
}

/// Parses a booking ID from a path segment.
pub fn parse_booking_id(raw: &str) -> Result<BookingId, AppError> {
    parse("booking", raw)
}

/// Parses a user ID from a path segment.
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    parse("user", raw)
}
