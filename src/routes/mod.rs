//! Page route handlers

pub mod booking;

use crate::error::AppError;

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
