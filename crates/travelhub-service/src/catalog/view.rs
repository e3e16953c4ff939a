//! Read models returned by the catalog.

use std::collections::HashMap;

use travelhub_core::types::UserId;
use travelhub_entity::destination::{Destination, Review};
use travelhub_entity::user::UserSummary;

/// A review with its author looked up.
#[derive(Debug, Clone)]
pub struct ResolvedReview {
    /// The stored review.
    pub review: Review,
    /// The reviewer, if the account still exists.
    pub reviewer: Option<UserSummary>,
}

/// A destination whose reviews carry reviewer names.
#[derive(Debug, Clone)]
pub struct ResolvedDestination {
    /// The destination record.
    pub destination: Destination,
    /// Reviews in submission order.
    pub reviews: Vec<ResolvedReview>,
}

impl ResolvedDestination {
    pub(crate) fn new(destination: Destination, reviewers: &HashMap<UserId, UserSummary>) -> Self {
        let reviews = destination
            .reviews
            .iter()
            .map(|review| ResolvedReview {
                review: review.clone(),
                reviewer: reviewers.get(&review.user_id).cloned(),
            })
            .collect();
        Self {
            destination,
            reviews,
        }
    }
}
