//! Convenience result type alias for TravelHub.

use crate::error::AppError;

/// A specialized `Result` type for TravelHub operations.
pub type AppResult<T> = Result<T, AppError>;
