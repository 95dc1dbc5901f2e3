use std::collections::BTreeMap;

use super::event::Event;
use super::participant::Participant;
use super::value_objects::TeamId;

/// Partition of an event's participants as shown on its dashboard
#[derive(Debug, Clone)]
pub struct RosterView {
    pub event: Event,
    pub pool: Vec<Participant>,
    pub roster: Vec<Participant>,
    /// Roster participants grouped by team, ascending team id
    pub teams: BTreeMap<TeamId, Vec<Participant>>,
}

impl RosterView {
    /// Splits participants into pool, roster and teams
    ///
    /// Input order is preserved inside every group.
    pub fn new(event: Event, participants: Vec<Participant>) -> Self {
        let (roster, pool): (Vec<_>, Vec<_>) =
            participants.into_iter().partition(Participant::is_on_roster);

        let mut teams: BTreeMap<TeamId, Vec<Participant>> = BTreeMap::new();
        for p in &roster {
            if let Some(team_id) = p.team_id() {
                teams.entry(team_id).or_default().push(p.clone());
            }
        }

        Self {
            event,
            pool,
            roster,
            teams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::value_objects::ParticipantStatus;
    use chrono::Utc;

    fn p(id: i64, status: ParticipantStatus, team: Option<u32>) -> Participant {
        Participant::from_persistence(id, 1, format!("P{}", id), status, team.and_then(TeamId::new))
    }

    #[test]
    fn partitions_and_groups_in_ascending_team_order() {
        let event = Event::from_persistence(1, "Doubles".to_string(), Utc::now());
        let participants = vec![
            p(1, ParticipantStatus::Roster, Some(2)),
            p(2, ParticipantStatus::Pool, None),
            p(3, ParticipantStatus::Roster, Some(1)),
            p(4, ParticipantStatus::Roster, Some(2)),
            p(5, ParticipantStatus::Roster, None),
            p(6, ParticipantStatus::Roster, Some(1)),
        ];

        let view = RosterView::new(event, participants);

        assert_eq!(view.pool.iter().map(Participant::id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(
            view.roster.iter().map(Participant::id).collect::<Vec<_>>(),
            vec![1, 3, 4, 5, 6]
        );

        let grouped: Vec<(u32, Vec<i64>)> = view
            .teams
            .iter()
            .map(|(team, members)| (team.get(), members.iter().map(Participant::id).collect()))
            .collect();
        assert_eq!(grouped, vec![(1, vec![3, 6]), (2, vec![1, 4])]);
    }

    #[test]
    fn no_participants_no_teams() {
        let event = Event::from_persistence(1, "Empty".to_string(), Utc::now());
        let view = RosterView::new(event, Vec::new());

        assert!(view.pool.is_empty());
        assert!(view.roster.is_empty());
        assert!(view.teams.is_empty());
    }
}
