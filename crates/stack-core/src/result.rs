//! Convenience result type alias for stackd.

use crate::error::AppError;

/// A specialized `Result` type for stackd operations.
pub type AppResult<T> = Result<T, AppError>;
