use super::value_objects::{EventId, ParticipantId, ParticipantStatus};

/// Domain events raised by roster mutations
///
/// Handlers log these once the corresponding change has been committed.
///
/// # Example
/// ```
/// use roster_api::domain::roster::events::RosterEvent;
///
/// let event = RosterEvent::TeamsFormed {
///     event_id: 7,
///     teams: 2,
///     leftover: None,
/// };
/// assert_eq!(event.event_id(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// An event was created
    EventCreated {
        event_id: EventId,
        name: String,
    },
    /// An event and all of its participants were removed
    EventDeleted {
        event_id: EventId,
    },
    /// A participant joined the pool of an event
    ParticipantRegistered {
        participant_id: ParticipantId,
        event_id: EventId,
    },
    /// A participant moved between pool and roster
    ParticipantMoved {
        participant_id: ParticipantId,
        event_id: EventId,
        status: ParticipantStatus,
    },
    /// The roster of an event was shuffled into pairs
    TeamsFormed {
        event_id: EventId,
        teams: usize,
        /// Roster participant left without a team (odd roster size)
        leftover: Option<ParticipantId>,
    },
}

impl RosterEvent {
    /// Returns the id of the event this change belongs to
    pub fn event_id(&self) -> EventId {
        match self {
            RosterEvent::EventCreated { event_id, .. }
            | RosterEvent::EventDeleted { event_id }
            | RosterEvent::ParticipantRegistered { event_id, .. }
            | RosterEvent::ParticipantMoved { event_id, .. }
            | RosterEvent::TeamsFormed { event_id, .. } => *event_id,
        }
    }

    /// Emits the event on the `roster` tracing target
    pub fn log(&self) {
        tracing::info!(target: "roster", event = ?self, "roster changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_reports_its_event() {
        let events = [
            RosterEvent::EventCreated {
                event_id: 1,
                name: "Tennis".to_string(),
            },
            RosterEvent::EventDeleted { event_id: 1 },
            RosterEvent::ParticipantRegistered {
                participant_id: 9,
                event_id: 1,
            },
            RosterEvent::ParticipantMoved {
                participant_id: 9,
                event_id: 1,
                status: ParticipantStatus::Roster,
            },
            RosterEvent::TeamsFormed {
                event_id: 1,
                teams: 0,
                leftover: Some(9),
            },
        ];

        for event in events {
            assert_eq!(event.event_id(), 1);
        }
    }
}
