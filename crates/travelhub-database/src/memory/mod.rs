//! Process-local repositories backed by `DashMap`.
//!
//! Used for development and tests. Every conditional write holds the
//! entry's shard lock while comparing versions, so the version check and
//! the write happen atomically.

pub mod booking;
pub mod destination;
pub mod user;

pub use booking::MemoryBookingRepository;
pub use destination::MemoryDestinationRepository;
pub use user::MemoryUserRepository;
