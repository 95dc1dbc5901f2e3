use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::roster::{DisplayName, EventId, Participant, ParticipantId, TeamAssignment};

/// Repository trait for participants of an event
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Register a participant into the pool of an event
    ///
    /// Fails with `NotFound` if the event is absent.
    async fn register(&self, event_id: EventId, name: &DisplayName)
        -> RepositoryResult<Participant>;

    /// Find a participant by ID
    async fn find_by_id(&self, id: ParticipantId) -> RepositoryResult<Option<Participant>>;

    /// All participants of an event in registration order
    async fn find_by_event(&self, event_id: EventId) -> RepositoryResult<Vec<Participant>>;

    /// Persist a participant's status and team
    ///
    /// Fails with `NotFound` if the participant no longer exists.
    async fn update_status(&self, participant: &Participant) -> RepositoryResult<()>;

    /// Replace every team assignment of an event
    ///
    /// All team ids of the event are cleared, then the assignment is written.
    /// Only participants still on the roster receive a team.
    async fn replace_teams(
        &self,
        event_id: EventId,
        assignment: &TeamAssignment,
    ) -> RepositoryResult<()>;

    /// Replace team assignments as a one-time admin grant's action
    ///
    /// The grant is consumed in the same transaction as the team writes.
    /// Fails with `NotFound` if the event is absent and with
    /// `GrantUnavailable` if the grant is unknown, expired or already used;
    /// in both cases nothing is written and the grant is left untouched.
    async fn replace_teams_with_grant(
        &self,
        event_id: EventId,
        assignment: &TeamAssignment,
        jti: Uuid,
    ) -> RepositoryResult<()>;
}
