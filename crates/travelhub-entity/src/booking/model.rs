//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use travelhub_core::error::AppError;
use travelhub_core::types::{BookingId, DestinationId, UserId};

use super::status::{BookingStatus, PaymentStatus};

/// Payment method recorded when the client does not name one.
pub const DEFAULT_PAYMENT_METHOD: &str = "Pay at Check-in";
/// Fewest travelers a booking may cover.
pub const MIN_TRAVELERS: i32 = 1;
/// Most travelers a booking may cover.
pub const MAX_TRAVELERS: i32 = 20;

/// A reservation of a destination by a user for a date range.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// Owner of the booking.
    pub user_id: UserId,
    /// Booked destination.
    pub destination_id: DestinationId,
    /// First day of the stay.
    pub start_date: DateTime<Utc>,
    /// End of the stay, strictly after `start_date`.
    pub end_date: DateTime<Utc>,
    /// Number of travelers.
    pub travelers: i32,
    /// Free-text notes.
    pub notes: String,
    /// Price snapshot taken at creation.
    pub total_price: f64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Settlement status.
    pub payment_status: PaymentStatus,
    /// Payment method label.
    pub payment_method: String,
    /// Optimistic concurrency counter.
    #[serde(skip)]
    pub version: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Move the booking to `target`, enforcing the state machine.
    ///
    /// Completing a booking settles its payment.
    pub fn transition(&mut self, target: BookingStatus, now: DateTime<Utc>) -> Result<(), AppError> {
        if !self.status.can_transition_to(target) {
            return Err(AppError::validation(format!(
                "Cannot change booking status from {} to {}",
                self.status, target
            )));
        }
        self.status = target;
        if target == BookingStatus::Completed {
            self.payment_status = PaymentStatus::Paid;
        }
        self.updated_at = now;
        Ok(())
    }

    /// Apply a payment update. Either part may be omitted.
    pub fn update_payment(
        &mut self,
        payment_status: Option<PaymentStatus>,
        payment_method: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        if self.status == BookingStatus::Cancelled {
            return Err(AppError::validation(
                "Cannot update payment of a cancelled booking",
            ));
        }
        if self.status == BookingStatus::Completed && payment_status == Some(PaymentStatus::Unpaid) {
            return Err(AppError::validation(
                "A completed booking cannot be marked unpaid",
            ));
        }

        if let Some(status) = payment_status {
            self.payment_status = status;
        }
        if let Some(method) = payment_method.map(|m| m.trim().to_string()) {
            if !method.is_empty() {
                self.payment_method = method;
            }
        }
        self.updated_at = now;
        Ok(())
    }
}
