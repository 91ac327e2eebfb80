use chrono::{DateTime, Utc};

use crate::errors::CursorRepositoryError;

/// Resumption checkpoint of the sink.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Cursor {
    pub cursor: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trait for interacting with the cursor repository.
///
/// This trait provides a clean abstraction over the underlying data store for the
/// account sink. It handles the retrieval and persistence of the checkpoint the
/// sink resumes from.
#[async_trait::async_trait]
pub trait CursorRepository: Send + Sync {
    /// The most recently saved cursor, if any.
    async fn get_cursor(&self) -> Result<Option<Cursor>, CursorRepositoryError>;

    /// Stores `cursor` as the current checkpoint, replacing any older one.
    async fn save_cursor(&self, cursor: &str) -> Result<Cursor, CursorRepositoryError>;

    /// Removes `cursor`, returning whether it was stored.
    async fn delete_cursor(&self, cursor: &str) -> Result<bool, CursorRepositoryError>;
}
