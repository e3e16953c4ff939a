//! Reviews embedded in a destination and the rating aggregate over them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use travelhub_core::error::AppError;
use travelhub_core::types::UserId;

/// Lowest accepted star rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i64 = 5;

/// A single traveller's rating of a destination.
///
/// Not independently addressable: a review is identified by the
/// (destination, reviewer) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// The reviewer.
    pub user_id: UserId,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Free-text comment (may be empty).
    #[serde(default)]
    pub comment: String,
    /// When the review was submitted or last updated.
    pub date: DateTime<Utc>,
}

impl Review {
    /// Validate a raw rating value and narrow it to the stored type.
    pub fn check_rating(rating: i64) -> Result<u8, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        Ok(rating as u8)
    }
}

/// Whether a submission appended a review or replaced the reviewer's
/// earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// First review from this user.
    Added,
    /// The user's existing review was overwritten in place.
    Updated,
}

/// Arithmetic mean of all review ratings; `0.0` for no reviews.
pub fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
    total as f64 / reviews.len() as f64
}
