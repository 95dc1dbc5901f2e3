use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::participants::ParticipantResponse;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::{AdminAuth, SessionAuth};
use crate::api::state::AppState;
use crate::auth::jwt::verify_admin_action_token;
use crate::auth::Role;
use crate::domain::repositories::{EventRepository, ParticipantRepository};
use crate::domain::roster::events::RosterEvent;
use crate::domain::roster::{form_teams, DisplayName, Event, EventId, RosterView};
use crate::infrastructure::repositories::{SqliteEventRepository, SqliteParticipantRepository};

/// Form body carrying a name; missing or empty names are ignored
#[derive(Debug, Deserialize)]
pub struct NameForm {
    pub name: Option<String>,
}

/// Form body of a shuffle request
#[derive(Debug, Deserialize)]
pub struct ShuffleForm {
    /// One-time token from POST /verify-admin
    pub admin_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id(),
            name: event.name().to_string(),
            created_at: event.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team_id: u32,
    pub members: Vec<ParticipantResponse>,
}

/// Event dashboard: pool, roster and teams in ascending order
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub event: EventResponse,
    pub pool: Vec<ParticipantResponse>,
    pub roster: Vec<ParticipantResponse>,
    pub teams: Vec<TeamResponse>,
}

impl From<&RosterView> for DashboardResponse {
    fn from(view: &RosterView) -> Self {
        Self {
            event: EventResponse::from(&view.event),
            pool: view.pool.iter().map(ParticipantResponse::from).collect(),
            roster: view.roster.iter().map(ParticipantResponse::from).collect(),
            teams: view
                .teams
                .iter()
                .map(|(team_id, members)| TeamResponse {
                    team_id: team_id.get(),
                    members: members.iter().map(ParticipantResponse::from).collect(),
                })
                .collect(),
        }
    }
}

fn present_name(form: Option<Form<NameForm>>) -> Option<String> {
    form.and_then(|Form(f)| f.name).filter(|name| !name.is_empty())
}

async fn require_event(pool: &SqlitePool, id: EventId) -> Result<Event, ApiError> {
    SqliteEventRepository::new(pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Event not found: {}", id)))
}

/// List all events, newest first
///
/// GET /
pub async fn list_events(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = SqliteEventRepository::new(pool).list_recent().await?;

    Ok(Json(events.iter().map(EventResponse::from).collect()))
}

/// Create an event (admin only)
///
/// POST /event/create
pub async fn create_event(
    _admin: AdminAuth,
    State(pool): State<SqlitePool>,
    form: Option<Form<NameForm>>,
) -> Result<Redirect, ApiError> {
    if let Some(name) = present_name(form) {
        let name = DisplayName::new(name).map_err(ApiError::bad_request)?;
        let event = SqliteEventRepository::new(pool).create(&name).await?;

        RosterEvent::EventCreated {
            event_id: event.id(),
            name: event.name().to_string(),
        }
        .log();
    }

    Ok(Redirect::to("/"))
}

/// Delete an event and all its participants (admin only)
///
/// DELETE /event/:id
pub async fn delete_event(
    _admin: AdminAuth,
    State(pool): State<SqlitePool>,
    Path(id): Path<EventId>,
) -> Result<StatusCode, ApiError> {
    SqliteEventRepository::new(pool).delete(id).await?;
    RosterEvent::EventDeleted { event_id: id }.log();

    Ok(StatusCode::OK)
}

/// Event dashboard
///
/// GET /event/:id
pub async fn event_dashboard(
    State(pool): State<SqlitePool>,
    Path(id): Path<EventId>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let event = require_event(&pool, id).await?;
    let participants = SqliteParticipantRepository::new(pool)
        .find_by_event(id)
        .await?;

    let view = RosterView::new(event, participants);
    Ok(Json(DashboardResponse::from(&view)))
}

/// Register a participant into the pool
///
/// POST /event/:id/register
pub async fn register_participant(
    State(pool): State<SqlitePool>,
    Path(id): Path<EventId>,
    form: Option<Form<NameForm>>,
) -> Result<Redirect, ApiError> {
    let event = require_event(&pool, id).await?;

    if let Some(name) = present_name(form) {
        let name = DisplayName::new(name).map_err(ApiError::bad_request)?;
        let participant = SqliteParticipantRepository::new(pool)
            .register(event.id(), &name)
            .await?;

        RosterEvent::ParticipantRegistered {
            participant_id: participant.id(),
            event_id: event.id(),
        }
        .log();
    }

    Ok(Redirect::to(&format!("/event/{}", event.id())))
}

/// Admin sessions shuffle directly; anyone else needs a valid admin token
///
/// Returns the grant id to consume together with the team writes, or `None`
/// for an admin session.
fn authorize_shuffle(
    state: &AppState,
    role: Role,
    admin_token: Option<String>,
) -> Result<Option<Uuid>, ApiError> {
    if role.is_admin() {
        return Ok(None);
    }

    let token = admin_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::forbidden("Admin privileges required"))?;

    let jti = verify_admin_action_token(&token, &state.auth.jwt_secret)
        .map_err(|e| ApiError::forbidden(format!("Invalid admin token: {}", e)))?;

    Ok(Some(jti))
}

/// Pair the event's roster into teams (admin only)
///
/// POST /event/:id/shuffle
pub async fn shuffle_teams(
    SessionAuth(role): SessionAuth,
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    form: Option<Form<ShuffleForm>>,
) -> Result<Redirect, ApiError> {
    let admin_token = form.and_then(|Form(f)| f.admin_token);
    let grant = authorize_shuffle(&state, role, admin_token)?;

    let event = require_event(&state.pool, id).await?;
    let repo = SqliteParticipantRepository::new(state.pool.clone());

    let roster = repo
        .find_by_event(event.id())
        .await?
        .into_iter()
        .filter(|p| p.is_on_roster())
        .map(|p| p.id())
        .collect();

    let assignment = {
        let mut rng = rand::thread_rng();
        form_teams(roster, &mut rng)
    }
    .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    match grant {
        Some(jti) => {
            repo.replace_teams_with_grant(event.id(), &assignment, jti)
                .await?;
            tracing::info!(jti = %jti, "Admin action token consumed");
        }
        None => repo.replace_teams(event.id(), &assignment).await?,
    }
    assignment.into_event(event.id()).log();

    Ok(Redirect::to(&format!("/event/{}", event.id())))
}
