//! # travelhub-database
//!
//! Persistence for TravelHub. Services talk to the repository traits in
//! [`repositories`]; [`Database`] selects the PostgreSQL or in-memory
//! implementation from configuration.

pub mod connection;
pub mod database;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod repositories;

pub use connection::DatabasePool;
pub use database::Database;
pub use repositories::{BookingRepository, DestinationRepository, UserRepository};
