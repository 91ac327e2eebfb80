//! Startup checkpoint lookup.
use account_postgres_sink_repository::{Cursor, CursorRepository};
use tracing::info;

use crate::SinkError;

/// Loads the stored checkpoint and logs where the sink resumes from.
pub async fn report_checkpoint(
    repository: &dyn CursorRepository,
) -> Result<Option<Cursor>, SinkError> {
    let cursor = repository.get_cursor().await?;
    match &cursor {
        Some(cursor) => info!(
            cursor = %cursor.cursor,
            updated_at = %cursor.updated_at,
            "Resuming from stored cursor"
        ),
        None => info!("No stored cursor, starting from the beginning"),
    }
    Ok(cursor)
}
