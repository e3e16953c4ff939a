//! PostgreSQL repositories built on sqlx.

pub mod booking;
pub mod destination;
pub mod user;

pub use booking::PgBookingRepository;
pub use destination::PgDestinationRepository;
pub use user::PgUserRepository;

use travelhub_core::error::{AppError, ErrorKind};

/// Wrap a sqlx error as a database error with context.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}
