//! Database access layer for persons-api

use persons_common::Result;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

pub mod persons;

/// Open (or create) the SQLite database and ensure the schema exists
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    // mode=rwc: create the database file if it does not exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePool::connect(&db_url).await?;
    initialize_schema(&pool).await?;

    info!("Database ready: {}", db_path.display());
    Ok(pool)
}

/// Create the persons table if it does not exist.
///
/// person_id is the externally visible identifier. Its UNIQUE index is what
/// turns the max+1 read-then-write race on the create path into a
/// detectable conflict.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS persons (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            person_id INTEGER NOT NULL UNIQUE,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            zip_code TEXT NOT NULL,
            city TEXT NOT NULL,
            colour TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
