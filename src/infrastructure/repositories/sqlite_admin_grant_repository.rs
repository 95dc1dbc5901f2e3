use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::domain::repositories::{AdminGrantRepository, RepositoryResult};

/// SQLite implementation of AdminGrantRepository
pub struct SqliteAdminGrantRepository {
    pool: SqlitePool,
}

impl SqliteAdminGrantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminGrantRepository for SqliteAdminGrantRepository {
    async fn issue(&self, jti: Uuid, expires_at: DateTime<Utc>) -> RepositoryResult<()> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM admin_grants WHERE expires_at < ?")
            .bind(now)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO admin_grants (jti, issued_at, expires_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(jti.to_string())
        .bind(now)
        .bind(expires_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn consume(&self, jti: Uuid) -> RepositoryResult<bool> {
        let mut conn = self.pool.acquire().await?;
        consume_grant(&mut conn, jti).await
    }
}

/// Deletes an unexpired grant; `true` if this call used it up
pub(crate) async fn consume_grant(conn: &mut SqliteConnection, jti: Uuid) -> RepositoryResult<bool> {
    let result = sqlx::query("DELETE FROM admin_grants WHERE jti = ? AND expires_at >= ?")
        .bind(jti.to_string())
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() == 1)
}
