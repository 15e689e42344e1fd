//! Startup seeding from the CSV file
//!
//! The whole file is parsed and validated before any row is written, so a
//! malformed record aborts the import with nothing stored. Each person is
//! then upserted by identifier, which makes re-running against the same
//! file idempotent and lets a changed file update existing rows.

use std::path::Path;

use persons_common::{import, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::db;

/// Import the seed file into the database, returning the person count
pub async fn seed_from_csv(pool: &SqlitePool, csv_path: &Path) -> Result<usize> {
    info!("CSV seed import started: {}", csv_path.display());

    let persons = import::import_persons_from_path(csv_path)?;

    for person in &persons {
        db::persons::upsert(pool, person).await?;
    }

    info!("CSV seed import finished: {} persons imported", persons.len());
    Ok(persons.len())
}
