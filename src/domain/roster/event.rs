use super::value_objects::EventId;
use chrono::{DateTime, Utc};

/// Event aggregate root
///
/// An event exclusively owns its participants: removing the event removes
/// every participant registered to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Event {
    /// Returns the event's ID
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Returns the event's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs an Event from persistence layer data
    ///
    /// Only to be used by repository implementations; the name was
    /// validated before it was stored.
    pub fn from_persistence(id: EventId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}
