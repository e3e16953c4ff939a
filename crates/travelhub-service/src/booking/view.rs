//! Bookings enriched with their destination and owner.

use travelhub_entity::booking::Booking;
use travelhub_entity::destination::Destination;
use travelhub_entity::user::UserSummary;

/// A booking with its related records looked up.
#[derive(Debug, Clone)]
pub struct BookingDetails {
    /// The booking.
    pub booking: Booking,
    /// The booked destination. Present for removed destinations too.
    pub destination: Option<Destination>,
    /// The owner.
    pub user: Option<UserSummary>,
}
