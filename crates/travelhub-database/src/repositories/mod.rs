//! Repository traits implemented by every storage backend.
//!
//! Writes to destinations and bookings are conditional on the `version`
//! the caller read: a record changed by someone else in the meantime is
//! left untouched and the write fails with a `Conflict` error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use travelhub_core::result::AppResult;
use travelhub_core::types::{BookingId, DestinationId, UserId};
use travelhub_entity::booking::Booking;
use travelhub_entity::destination::{CatalogMeta, Destination, DestinationFilter};
use travelhub_entity::user::{CreateUser, User};

/// Storage for destinations and their embedded reviews.
#[async_trait]
pub trait DestinationRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a destination by id, including soft-deleted ones.
    async fn find_by_id(&self, id: DestinationId) -> AppResult<Option<Destination>>;

    /// Fetch several destinations at once. Missing ids are skipped.
    async fn find_by_ids(&self, ids: &[DestinationId]) -> AppResult<Vec<Destination>>;

    /// Listed destinations matching a normalized filter, newest first.
    async fn query(&self, filter: &DestinationFilter) -> AppResult<Vec<Destination>>;

    /// Distinct filter values over listed destinations.
    async fn meta(&self) -> AppResult<CatalogMeta>;

    /// Every destination that is not soft-deleted, newest first.
    async fn find_all(&self) -> AppResult<Vec<Destination>>;

    /// Insert a new destination.
    async fn create(&self, destination: &Destination) -> AppResult<Destination>;

    /// Persist `destination` if its stored version still equals
    /// `destination.version`. Returns the stored record with its bumped
    /// version.
    async fn update(&self, destination: &Destination) -> AppResult<Destination>;

    /// Mark a destination deleted, conditional on `version`.
    async fn soft_delete(
        &self,
        id: DestinationId,
        version: i64,
        now: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Bump the version of a destination that is not deleted, so any write
    /// based on an earlier read of it fails. `NotFound` when the
    /// destination is missing or deleted.
    async fn touch(&self, id: DestinationId, now: DateTime<Utc>) -> AppResult<()>;

    /// Remove every destination. Returns the number removed.
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Storage for bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a booking by id.
    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>>;

    /// Bookings owned by a user, newest first.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>>;

    /// All bookings, newest first.
    async fn find_all(&self) -> AppResult<Vec<Booking>>;

    /// Insert a new booking.
    async fn create(&self, booking: &Booking) -> AppResult<Booking>;

    /// Persist `booking` if its stored version still equals
    /// `booking.version`.
    async fn update(&self, booking: &Booking) -> AppResult<Booking>;

    /// Whether the user has a completed booking for the destination.
    async fn has_completed(&self, user_id: UserId, destination_id: DestinationId)
    -> AppResult<bool>;

    /// Number of pending or confirmed bookings for a destination.
    async fn count_active_for_destination(&self, destination_id: DestinationId) -> AppResult<i64>;

    /// Remove a single booking. Returns whether it existed.
    async fn remove(&self, id: BookingId) -> AppResult<bool>;

    /// Remove every booking. Returns the number removed.
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Storage for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by id.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Fetch several users at once. Missing ids are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;

    /// Create a user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// The error returned when a conditional write loses a race.
pub(crate) fn stale_write(entity: &str) -> travelhub_core::error::AppError {
    travelhub_core::error::AppError::conflict(format!(
        "{entity} was modified concurrently, reload and try again"
    ))
}
