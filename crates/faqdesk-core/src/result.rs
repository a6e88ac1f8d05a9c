//! Convenience result type alias for FAQ Desk.

use crate::error::AppError;

/// A specialized `Result` type for FAQ Desk operations.
pub type AppResult<T> = Result<T, AppError>;
