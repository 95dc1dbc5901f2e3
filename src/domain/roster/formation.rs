// Team formation: random pairing of roster participants

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::events::RosterEvent;
use super::value_objects::{EventId, ParticipantId, TeamId};

/// Two roster participants sharing a team number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub team_id: TeamId,
    pub members: [ParticipantId; 2],
}

/// Outcome of one shuffle over an event's roster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamAssignment {
    pub pairings: Vec<Pairing>,
    /// Present only when the roster size is odd
    pub leftover: Option<ParticipantId>,
}

impl TeamAssignment {
    pub fn team_count(&self) -> usize {
        self.pairings.len()
    }

    /// Iterates `(participant, team)` for every paired participant
    pub fn members(&self) -> impl Iterator<Item = (ParticipantId, TeamId)> + '_ {
        self.pairings
            .iter()
            .flat_map(|p| p.members.iter().map(move |&id| (id, p.team_id)))
    }

    pub fn into_event(self, event_id: EventId) -> RosterEvent {
        RosterEvent::TeamsFormed {
            event_id,
            teams: self.pairings.len(),
            leftover: self.leftover,
        }
    }
}

/// The roster holds more pairs than team numbers exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Roster of {0} participants exceeds the team number range")]
pub struct RosterTooLarge(pub usize);

/// Pairs the roster into teams of two
///
/// The roster is uniformly permuted, then split into consecutive pairs in
/// permuted order; pair `i` becomes team `i + 1`. With an odd roster the
/// last participant in permuted order is left without a team. Empty and
/// singleton rosters produce no teams.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use roster_api::domain::roster::formation::form_teams;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let assignment = form_teams(vec![1, 2, 3, 4, 5], &mut rng).unwrap();
///
/// assert_eq!(assignment.team_count(), 2);
/// assert!(assignment.leftover.is_some());
/// ```
pub fn form_teams<R>(
    mut roster: Vec<ParticipantId>,
    rng: &mut R,
) -> Result<TeamAssignment, RosterTooLarge>
where
    R: Rng + ?Sized,
{
    let size = roster.len();
    roster.shuffle(rng);

    let mut pairs = roster.chunks_exact(2);
    let pairings = pairs
        .by_ref()
        .enumerate()
        .map(|(index, pair)| {
            TeamId::for_pair(index)
                .map(|team_id| Pairing {
                    team_id,
                    members: [pair[0], pair[1]],
                })
                .ok_or(RosterTooLarge(size))
        })
        .collect::<Result<_, _>>()?;
    let leftover = pairs.remainder().first().copied();

    Ok(TeamAssignment { pairings, leftover })
}
