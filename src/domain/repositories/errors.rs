use thiserror::Error;

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt row: {0}")]
    Corrupt(String),

    #[error("Admin grant already used or expired")]
    GrantUnavailable,
}

impl RepositoryError {
    pub fn event_not_found(id: i64) -> Self {
        Self::NotFound { entity: "Event", id }
    }

    pub fn participant_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "Participant",
            id,
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
