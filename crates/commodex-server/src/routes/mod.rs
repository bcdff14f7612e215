pub mod commodities;
pub mod health;

use crate::error::ApiError;

/// Router-level fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
