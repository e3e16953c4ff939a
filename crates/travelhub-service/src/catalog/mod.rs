//! Destination catalog: queries, metadata, and admin maintenance.

pub mod input;
pub mod service;
pub mod view;

pub use input::DestinationInput;
pub use service::CatalogService;
pub use view::{ResolvedDestination, ResolvedReview};
