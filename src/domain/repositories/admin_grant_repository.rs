use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RepositoryResult;

/// Storage for one-time admin action grants
#[async_trait]
pub trait AdminGrantRepository: Send + Sync {
    /// Record a freshly issued grant and prune expired ones
    async fn issue(&self, jti: Uuid, expires_at: DateTime<Utc>) -> RepositoryResult<()>;

    /// Consume a grant; returns `false` if it was unknown or already used
    async fn consume(&self, jti: Uuid) -> RepositoryResult<bool>;
}
