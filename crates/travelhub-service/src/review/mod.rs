//! Review submission and rating aggregation.

pub mod service;

pub use service::{ReviewService, ReviewSubmission};
