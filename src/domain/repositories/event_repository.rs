use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::roster::{DisplayName, Event, EventId};

/// Repository trait for the Event aggregate
///
/// Deleting an event is the only way participants are removed.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Create an event with no participants
    async fn create(&self, name: &DisplayName) -> RepositoryResult<Event>;

    /// Find an event by its ID
    async fn find_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>>;

    /// List all events, newest first
    async fn list_recent(&self) -> RepositoryResult<Vec<Event>>;

    /// Delete an event together with its participants
    ///
    /// Fails with `NotFound` (and removes nothing) if the event is absent.
    async fn delete(&self, id: EventId) -> RepositoryResult<()>;
}
