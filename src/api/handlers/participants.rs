use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::repositories::ParticipantRepository;
use crate::domain::roster::{EventId, Participant, ParticipantId, ParticipantStatus};
use crate::infrastructure::repositories::SqliteParticipantRepository;

/// Participant as shown on a dashboard
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: ParticipantId,
    pub event_id: EventId,
    pub name: String,
    pub status: ParticipantStatus,
    pub team_id: Option<u32>,
}

impl From<&Participant> for ParticipantResponse {
    fn from(p: &Participant) -> Self {
        Self {
            id: p.id(),
            event_id: p.event_id(),
            name: p.name().to_string(),
            status: p.status(),
            team_id: p.team_id().map(|t| t.get()),
        }
    }
}

/// Toggle a participant between pool and roster
///
/// POST /participant/:id/move
pub async fn move_participant(
    State(pool): State<SqlitePool>,
    Path(id): Path<ParticipantId>,
) -> Result<Redirect, ApiError> {
    let repo = SqliteParticipantRepository::new(pool);
    let mut participant = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Participant not found: {}", id)))?;

    let moved = participant.toggle_status();
    repo.update_status(&participant).await?;
    moved.log();

    Ok(Redirect::to(&format!("/event/{}", participant.event_id())))
}
