//! # travelhub-service
//!
//! Business logic for TravelHub. Services receive a [`RequestContext`]
//! describing the caller, apply access rules and domain invariants, and
//! persist through the repository traits of `travelhub-database`.

pub mod account;
pub mod booking;
pub mod catalog;
pub mod context;
pub mod review;

pub use account::AccountService;
pub use booking::BookingService;
pub use catalog::CatalogService;
pub use context::RequestContext;
pub use review::ReviewService;

#[cfg(test)]
pub(crate) mod testing;
