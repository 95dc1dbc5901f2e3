pub mod auth;
pub mod events;
pub mod participants;

use crate::api::errors::ApiError;

/// Fallback for unknown paths (only reached once logged in)
pub async fn not_found() -> ApiError {
    ApiError::not_found("No such page")
}
