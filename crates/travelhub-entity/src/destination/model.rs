//! Destination entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use travelhub_core::types::{DestinationId, UserId};

use super::category::Category;
use super::review::{Review, ReviewOutcome, mean_rating};

/// The rating values offered by catalog filters.
pub const RATING_SCALE: [u8; 5] = [1, 2, 3, 4, 5];

/// A bookable travel listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique destination identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Human-readable location, e.g. "Paris, France".
    pub location: String,
    /// Country used for filtering.
    pub country: String,
    /// Long description.
    pub description: String,
    /// Price per traveller per day.
    pub price: f64,
    /// Image URLs; never empty.
    pub images: Vec<String>,
    /// Duration label, e.g. "5 days".
    pub duration: String,
    /// Catalog category.
    pub category: Category,
    /// Free-text season hint.
    pub best_time_to_visit: String,
    /// Activity labels.
    pub activities: Vec<String>,
    /// Whether the destination is offered for booking.
    pub available: bool,
    /// Embedded reviews, in submission order.
    #[sqlx(json)]
    pub reviews: Vec<Review>,
    /// Mean of all review ratings (0 with no reviews).
    pub average_rating: f64,
    /// Display rating. Seeded with the catalog rating and kept equal to
    /// `average_rating` once reviews exist.
    pub rating: f64,
    /// Optimistic concurrency counter, bumped on every write.
    #[serde(skip)]
    pub version: i64,
    /// Creation time; catalog listings sort on this, newest first.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
    /// Set when an administrator removes the listing.
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Destination {
    /// Build a fresh, unsaved destination from validated input.
    pub fn from_new(data: NewDestination, now: DateTime<Utc>) -> Self {
        Self {
            id: DestinationId::new(),
            name: data.name,
            location: data.location,
            country: data.country,
            description: data.description,
            price: data.price,
            images: data.images,
            duration: data.duration,
            category: data.category,
            best_time_to_visit: data.best_time_to_visit,
            activities: data.activities,
            available: data.available,
            reviews: Vec::new(),
            average_rating: 0.0,
            rating: data.rating.clamp(0.0, 5.0),
            version: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// The first image, exposed to older clients as `image`.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the destination shows up in the public catalog.
    pub fn is_listed(&self) -> bool {
        self.available && self.deleted_at.is_none()
    }

    /// Find the review left by `user_id`, if any.
    pub fn review_by(&self, user_id: UserId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.user_id == user_id)
    }

    /// Insert or replace the review from `user_id` and recompute the
    /// rating aggregate.
    ///
    /// `rating` must already be validated with [`Review::check_rating`].
    pub fn upsert_review(
        &mut self,
        user_id: UserId,
        rating: u8,
        comment: String,
        now: DateTime<Utc>,
    ) -> ReviewOutcome {
        let outcome = match self.reviews.iter_mut().find(|r| r.user_id == user_id) {
            Some(existing) => {
                existing.rating = rating;
                existing.comment = comment;
                existing.date = now;
                ReviewOutcome::Updated
            }
            None => {
                self.reviews.push(Review {
                    user_id,
                    rating,
                    comment,
                    date: now,
                });
                ReviewOutcome::Added
            }
        };
        self.recompute_rating();
        outcome
    }

    /// Recompute `average_rating` from scratch and mirror it into `rating`.
    pub fn recompute_rating(&mut self) {
        self.average_rating = mean_rating(&self.reviews);
        if !self.reviews.is_empty() {
            self.rating = self.average_rating;
        }
    }
}

/// Validated input for a new destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDestination {
    /// Display name.
    pub name: String,
    /// Human-readable location.
    pub location: String,
    /// Country.
    pub country: String,
    /// Long description.
    pub description: String,
    /// Price per traveller per day.
    pub price: f64,
    /// Image URLs (at least one).
    pub images: Vec<String>,
    /// Duration label.
    pub duration: String,
    /// Category.
    pub category: Category,
    /// Season hint.
    pub best_time_to_visit: String,
    /// Activity labels.
    pub activities: Vec<String>,
    /// Whether bookable.
    pub available: bool,
    /// Initial display rating (catalog seed data).
    pub rating: f64,
}

/// Distinct filter values present in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMeta {
    /// Sorted distinct countries.
    pub countries: Vec<String>,
    /// Sorted distinct categories.
    pub categories: Vec<String>,
    /// The fixed rating scale.
    pub ratings: Vec<u8>,
}

impl CatalogMeta {
    /// Collect distinct countries and categories from listed destinations.
    pub fn from_destinations<'a>(destinations: impl IntoIterator<Item = &'a Destination>) -> Self {
        let mut countries = std::collections::BTreeSet::new();
        let mut categories = std::collections::BTreeSet::new();
        for destination in destinations.into_iter().filter(|d| d.is_listed()) {
            if !destination.country.is_empty() {
                countries.insert(destination.country.clone());
            }
            categories.insert(destination.category.as_str().to_string());
        }
        Self {
            countries: countries.into_iter().collect(),
            categories: categories.into_iter().collect(),
            ratings: RATING_SCALE.to_vec(),
        }
    }
}
