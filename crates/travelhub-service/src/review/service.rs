//! Review service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::DestinationId;
use travelhub_database::{BookingRepository, DestinationRepository};
use travelhub_entity::destination::{Review, ReviewOutcome};

use crate::catalog::{CatalogService, ResolvedDestination};
use crate::context::RequestContext;

/// Result of a review submission.
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    /// The destination after the review was stored.
    pub destination: ResolvedDestination,
    /// Whether the review was new or replaced an earlier one.
    pub outcome: ReviewOutcome,
}

/// Accepts reviews from travelers who completed a trip.
#[derive(Debug, Clone)]
pub struct ReviewService {
    destinations: Arc<dyn DestinationRepository>,
    bookings: Arc<dyn BookingRepository>,
    catalog: Arc<CatalogService>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        destinations: Arc<dyn DestinationRepository>,
        bookings: Arc<dyn BookingRepository>,
        catalog: Arc<CatalogService>,
    ) -> Self {
        Self {
            destinations,
            bookings,
            catalog,
        }
    }

    /// Add or replace the caller's review and recompute the average.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        destination_id: DestinationId,
        rating: i64,
        comment: Option<String>,
    ) -> AppResult<ReviewSubmission> {
        let rating = Review::check_rating(rating)?;
        let mut destination = self.catalog.load(destination_id).await?;

        if !self
            .bookings
            .has_completed(ctx.user_id, destination_id)
            .await?
        {
            return Err(AppError::forbidden(
                "You can only review destinations after completing a booking",
            ));
        }

        let now = Utc::now();
        let outcome = destination.upsert_review(
            ctx.user_id,
            rating,
            comment.map(|c| c.trim().to_string()).unwrap_or_default(),
            now,
        );
        destination.updated_at = now;
        let stored = self.destinations.update(&destination).await?;

        info!(
            destination_id = %destination_id,
            user_id = %ctx.user_id,
            rating,
            outcome = ?outcome,
            average_rating = stored.average_rating,
            "Review submitted"
        );

        Ok(ReviewSubmission {
            destination: self.catalog.resolve(stored).await?,
            outcome,
        })
    }
}
