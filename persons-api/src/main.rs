//! persons-api - Persons CRUD service
//!
//! Serves the persons resource over HTTP from a SQLite database, seeded at
//! startup from a CSV file.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use persons_api::{build_router, AppState};

/// Command-line arguments for persons-api
#[derive(Parser, Debug)]
#[command(name = "persons-api")]
#[command(about = "Persons CRUD service with CSV seed import")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "PERSONS_PORT")]
    port: u16,

    /// SQLite database file (created if missing)
    #[arg(short, long, default_value = "persons.db", env = "PERSONS_DB_PATH")]
    database: PathBuf,

    /// CSV seed file imported at startup
    #[arg(short, long, default_value = "sample-input.csv", env = "PERSONS_CSV_PATH")]
    csv: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "persons_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting persons-api v{}", env!("CARGO_PKG_VERSION"));
    info!("Database: {}", args.database.display());
    info!("Seed file: {}", args.csv.display());

    let pool = persons_api::db::connect(&args.database)
        .await
        .context("Failed to open database")?;

    // All-or-nothing: a malformed seed file aborts startup
    persons_api::seed::seed_from_csv(&pool, &args.csv)
        .await
        .context("CSV seed import failed")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("persons-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
