use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::{Cursor, CursorRepository, CursorRepositoryError};

/// Cursor repository holding the checkpoint in memory.
#[derive(Debug, Default)]
pub struct InMemoryCursorRepository {
    current: RwLock<Option<Cursor>>,
}

impl InMemoryCursorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CursorRepository for InMemoryCursorRepository {
    async fn get_cursor(&self) -> Result<Option<Cursor>, CursorRepositoryError> {
        Ok(self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn save_cursor(&self, cursor: &str) -> Result<Cursor, CursorRepositoryError> {
        let now = Utc::now();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let saved = match current.take() {
            Some(existing) if existing.cursor == cursor => Cursor {
                updated_at: now,
                ..existing
            },
            _ => Cursor {
                cursor: cursor.to_string(),
                created_at: now,
                updated_at: now,
            },
        };
        *current = Some(saved.clone());
        Ok(saved)
    }

    async fn delete_cursor(&self, cursor: &str) -> Result<bool, CursorRepositoryError> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref().is_some_and(|c| c.cursor == cursor) {
            *current = None;
            return Ok(true);
        }
        Ok(false)
    }
}
