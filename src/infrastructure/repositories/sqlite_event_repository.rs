use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::repositories::{EventRepository, RepositoryError, RepositoryResult};
use crate::domain::roster::{DisplayName, Event, EventId};

/// SQLite implementation of EventRepository
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Creates a new SqliteEventRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for SQLite
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(r: EventRow) -> Self {
        Event::from_persistence(r.id, r.name, r.created_at)
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn create(&self, name: &DisplayName) -> RepositoryResult<Event> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO events (name, created_at)
            VALUES (?, ?)
            "#,
        )
        .bind(name.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Event::from_persistence(
            result.last_insert_rowid(),
            name.as_str().to_string(),
            created_at,
        ))
    }

    async fn find_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, created_at
            FROM events
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Event::from))
    }

    async fn list_recent(&self) -> RepositoryResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, created_at
            FROM events
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn delete(&self, id: EventId) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(RepositoryError::event_not_found(id));
        }

        // Children first, then the owning event
        let removed = sqlx::query("DELETE FROM participants WHERE event_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(event_id = id, participants = removed, "event deleted");
        Ok(())
    }
}
