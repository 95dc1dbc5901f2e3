use super::events::RosterEvent;
use super::value_objects::{EventId, ParticipantId, ParticipantStatus, TeamId};

/// A person registered to an event
///
/// # Invariants
/// - `team_id` is `None` whenever `status` is [`ParticipantStatus::Pool`]
/// - `team_id` only changes through a shuffle (set) or a move (cleared)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    event_id: EventId,
    name: String,
    status: ParticipantStatus,
    team_id: Option<TeamId>,
}

impl Participant {
    /// Moves the participant between pool and roster
    ///
    /// Any team assignment is dropped: a participant only regains a team
    /// through the next shuffle.
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::roster::participant::Participant;
    /// use roster_api::domain::roster::value_objects::{ParticipantStatus, TeamId};
    ///
    /// let mut p = Participant::from_persistence(
    ///     1, 1, "Alice".to_string(), ParticipantStatus::Roster, TeamId::new(2),
    /// );
    /// p.toggle_status();
    /// assert_eq!(p.status(), ParticipantStatus::Pool);
    /// assert_eq!(p.team_id(), None);
    /// ```
    pub fn toggle_status(&mut self) -> RosterEvent {
        self.status = self.status.toggled();
        self.team_id = None;

        RosterEvent::ParticipantMoved {
            participant_id: self.id,
            event_id: self.event_id,
            status: self.status,
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ParticipantStatus {
        self.status
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn is_on_roster(&self) -> bool {
        self.status == ParticipantStatus::Roster
    }

    /// Reconstructs a Participant from persistence layer data
    ///
    /// A team id stored against a pool participant is discarded so the
    /// pool invariant holds even for rows written by older code.
    pub fn from_persistence(
        id: ParticipantId,
        event_id: EventId,
        name: String,
        status: ParticipantStatus,
        team_id: Option<TeamId>,
    ) -> Self {
        let team_id = match status {
            ParticipantStatus::Pool => None,
            ParticipantStatus::Roster => team_id,
        };

        Self {
            id,
            event_id,
            name,
            status,
            team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(status: ParticipantStatus, team: Option<u32>) -> Participant {
        Participant::from_persistence(
            10,
            3,
            "Bob".to_string(),
            status,
            team.and_then(TeamId::new),
        )
    }

    #[test]
    fn pool_to_roster_has_no_team() {
        let mut p = participant(ParticipantStatus::Pool, None);

        let event = p.toggle_status();

        assert_eq!(p.status(), ParticipantStatus::Roster);
        assert_eq!(p.team_id(), None);
        assert_eq!(
            event,
            RosterEvent::ParticipantMoved {
                participant_id: 10,
                event_id: 3,
                status: ParticipantStatus::Roster,
            }
        );
    }

    #[test]
    fn roster_to_pool_clears_any_team() {
        for team in 1..=50 {
            let mut p = participant(ParticipantStatus::Roster, Some(team));
            assert!(p.team_id().is_some());

            p.toggle_status();

            assert_eq!(p.status(), ParticipantStatus::Pool);
            assert_eq!(p.team_id(), None);
        }
    }

    #[test]
    fn pool_participant_never_carries_team() {
        let p = participant(ParticipantStatus::Pool, Some(4));
        assert_eq!(p.team_id(), None);
    }

    #[test]
    fn getters() {
        let p = participant(ParticipantStatus::Roster, Some(1));

        assert_eq!(p.id(), 10);
        assert_eq!(p.event_id(), 3);
        assert_eq!(p.name(), "Bob");
        assert!(p.is_on_roster());
        assert_eq!(p.team_id(), TeamId::new(1));
    }
}
