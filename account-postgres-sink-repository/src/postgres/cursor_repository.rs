//! PostgreSQL implementation of the cursor repository.
//!
//! Stores the sink checkpoint in the `cursors` table to enable resumption after restarts.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::CursorRepositoryError;
use crate::{Cursor, CursorRepository};

/// PostgreSQL-backed cursor repository.
///
/// Keeps a single checkpoint row; saving a new cursor replaces the previous one
/// in the same transaction.
pub struct PostgresCursorRepository {
    /// PostgreSQL connection pool
    pool: sqlx::PgPool,
}

impl PostgresCursorRepository {
    /// Creates a new PostgreSQL cursor repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with required schema (cursors table)
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CursorRepository for PostgresCursorRepository {
    async fn get_cursor(&self) -> Result<Option<Cursor>, CursorRepositoryError> {
        let cursor = sqlx::query_as::<_, Cursor>(
            "SELECT cursor, created_at, updated_at FROM cursors ORDER BY updated_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(cursor)
    }

    async fn save_cursor(&self, cursor: &str) -> Result<Cursor, CursorRepositoryError> {
        let mut tx = self.pool.begin().await?;

        let saved = sqlx::query_as::<_, Cursor>(
            "INSERT INTO cursors (cursor) VALUES ($1) \
             ON CONFLICT (cursor) DO UPDATE SET updated_at = now() \
             RETURNING cursor, created_at, updated_at",
        )
        .bind(cursor)
        .fetch_one(&mut *tx)
        .await?;

        let pruned = sqlx::query("DELETE FROM cursors WHERE cursor <> $1")
            .bind(cursor)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        debug!(cursor, pruned, "Saved cursor");
        Ok(saved)
    }

    async fn delete_cursor(&self, cursor: &str) -> Result<bool, CursorRepositoryError> {
        let result = sqlx::query("DELETE FROM cursors WHERE cursor = $1")
            .bind(cursor)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
