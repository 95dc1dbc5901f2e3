use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use super::sqlite_admin_grant_repository::consume_grant;

use crate::domain::repositories::{ParticipantRepository, RepositoryError, RepositoryResult};
use crate::domain::roster::{
    DisplayName, EventId, Participant, ParticipantId, ParticipantStatus, TeamAssignment, TeamId,
};

/// SQLite implementation of ParticipantRepository
///
/// Team writes are guarded by `status = 'roster'`, so a participant moved
/// back to the pool between a shuffle's read and write never gets a team.
pub struct SqliteParticipantRepository {
    pool: SqlitePool,
}

impl SqliteParticipantRepository {
    /// Creates a new SqliteParticipantRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    id: i64,
    event_id: i64,
    name: String,
    status: String,
    team_id: Option<i64>,
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = RepositoryError;

    fn try_from(r: ParticipantRow) -> Result<Self, Self::Error> {
        let status = r
            .status
            .parse::<ParticipantStatus>()
            .map_err(RepositoryError::Corrupt)?;

        let team_id = r
            .team_id
            .map(|t| {
                u32::try_from(t)
                    .ok()
                    .and_then(TeamId::new)
                    .ok_or_else(|| {
                        RepositoryError::Corrupt(format!("Invalid team id {} for participant {}", t, r.id))
                    })
            })
            .transpose()?;

        Ok(Participant::from_persistence(
            r.id, r.event_id, r.name, status, team_id,
        ))
    }
}

async fn event_exists<'e, E>(executor: E, event_id: EventId) -> RepositoryResult<bool>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM events WHERE id = ?")
        .bind(event_id)
        .fetch_optional(executor)
        .await?;

    Ok(found.is_some())
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepository {
    async fn register(
        &self,
        event_id: EventId,
        name: &DisplayName,
    ) -> RepositoryResult<Participant> {
        let mut tx = self.pool.begin().await?;

        if !event_exists(&mut *tx, event_id).await? {
            return Err(RepositoryError::event_not_found(event_id));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO participants (event_id, name, status, team_id)
            VALUES (?, ?, ?, NULL)
            "#,
        )
        .bind(event_id)
        .bind(name.as_str())
        .bind(ParticipantStatus::Pool.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Participant::from_persistence(
            result.last_insert_rowid(),
            event_id,
            name.as_str().to_string(),
            ParticipantStatus::Pool,
            None,
        ))
    }

    async fn find_by_id(&self, id: ParticipantId) -> RepositoryResult<Option<Participant>> {
        let row = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT id, event_id, name, status, team_id
            FROM participants
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Participant::try_from).transpose()
    }

    async fn find_by_event(&self, event_id: EventId) -> RepositoryResult<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT id, event_id, name, status, team_id
            FROM participants
            WHERE event_id = ?
            ORDER BY id
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Participant::try_from).collect()
    }

    async fn update_status(&self, participant: &Participant) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE participants
            SET status = ?, team_id = ?
            WHERE id = ?
            "#,
        )
        .bind(participant.status().as_str())
        .bind(participant.team_id().map(|t| i64::from(t.get())))
        .bind(participant.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::participant_not_found(participant.id()));
        }

        Ok(())
    }

    async fn replace_teams(
        &self,
        event_id: EventId,
        assignment: &TeamAssignment,
    ) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        if !event_exists(&mut *tx, event_id).await? {
            return Err(RepositoryError::event_not_found(event_id));
        }

        write_teams(&mut tx, event_id, assignment).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn replace_teams_with_grant(
        &self,
        event_id: EventId,
        assignment: &TeamAssignment,
        jti: Uuid,
    ) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        if !event_exists(&mut *tx, event_id).await? {
            return Err(RepositoryError::event_not_found(event_id));
        }
        if !consume_grant(&mut tx, jti).await? {
            return Err(RepositoryError::GrantUnavailable);
        }

        write_teams(&mut tx, event_id, assignment).await?;
        tx.commit().await?;
        Ok(())
    }
}

async fn write_teams(
    conn: &mut SqliteConnection,
    event_id: EventId,
    assignment: &TeamAssignment,
) -> RepositoryResult<()> {
    sqlx::query("UPDATE participants SET team_id = NULL WHERE event_id = ?")
        .bind(event_id)
        .execute(&mut *conn)
        .await?;

    for (participant_id, team_id) in assignment.members() {
        let result = sqlx::query(
            r#"
            UPDATE participants
            SET team_id = ?
            WHERE id = ? AND event_id = ? AND status = 'roster'
            "#,
        )
        .bind(i64::from(team_id.get()))
        .bind(participant_id)
        .bind(event_id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(
                event_id,
                participant_id,
                "participant left the roster before teams were written"
            );
        }
    }

    Ok(())
}
