//! Destination catalog entities.

pub mod category;
pub mod filter;
pub mod model;
pub mod review;

pub use category::Category;
pub use filter::DestinationFilter;
pub use model::{CatalogMeta, Destination, NewDestination, RATING_SCALE};
pub use review::{Review, ReviewOutcome, mean_rating};
