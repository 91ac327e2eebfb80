//! Integration tests for PostgreSQL cursor repository implementation.
//!
//! These tests require a real PostgreSQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test --test postgres_cursor -- --ignored`

use account_postgres_sink_repository::{CursorRepository, PostgresCursorRepository};

// ============================================================================
// Basic Cursor Operations Tests
// ============================================================================

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_save_and_get_cursor(pool: sqlx::PgPool) {
    let repository = PostgresCursorRepository::new(pool.clone());

    let saved = repository.save_cursor("cursor_12345abcdef").await.unwrap();
    assert_eq!(saved.cursor, "cursor_12345abcdef");

    let retrieved = repository.get_cursor().await.unwrap();
    assert_eq!(retrieved, Some(saved));

    // Verify in database
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cursors")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_get_cursor_on_empty_table(pool: sqlx::PgPool) {
    let repository = PostgresCursorRepository::new(pool);
    assert!(repository.get_cursor().await.unwrap().is_none());
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_new_cursor_replaces_previous(pool: sqlx::PgPool) {
    let repository = PostgresCursorRepository::new(pool.clone());

    repository.save_cursor("cursor_1").await.unwrap();
    repository.save_cursor("cursor_2").await.unwrap();

    let retrieved = repository.get_cursor().await.unwrap().unwrap();
    assert_eq!(retrieved.cursor, "cursor_2");

    // Verify only one record exists
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cursors")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_resaving_cursor_bumps_updated_at(pool: sqlx::PgPool) {
    let repository = PostgresCursorRepository::new(pool);

    let first = repository.save_cursor("cursor_1").await.unwrap();
    let second = repository.save_cursor("cursor_1").await.unwrap();

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_cursor(pool: sqlx::PgPool) {
    let repository = PostgresCursorRepository::new(pool);
    repository.save_cursor("cursor_1").await.unwrap();

    assert!(!repository.delete_cursor("unknown").await.unwrap());
    assert!(repository.delete_cursor("cursor_1").await.unwrap());
    assert!(repository.get_cursor().await.unwrap().is_none());
}

// ============================================================================
// Edge Case Tests
// ============================================================================

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_special_characters_in_cursor(pool: sqlx::PgPool) {
    let repository = PostgresCursorRepository::new(pool);
    let special_cursor = "cursor_with-special.chars@123/456:'quoted'";

    repository.save_cursor(special_cursor).await.unwrap();

    let result = repository.get_cursor().await.unwrap().unwrap();
    assert_eq!(result.cursor, special_cursor);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_multiple_repository_instances(pool: sqlx::PgPool) {
    let repo1 = PostgresCursorRepository::new(pool.clone());
    let repo2 = PostgresCursorRepository::new(pool);

    repo1.save_cursor("cursor_from_repo1").await.unwrap();

    let result = repo2.get_cursor().await.unwrap().unwrap();
    assert_eq!(result.cursor, "cursor_from_repo1");
}
