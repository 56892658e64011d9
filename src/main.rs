use anyhow::Context;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use streetcode_api::app::{app, AppState};
use streetcode_api::config;
use streetcode_api::db;
use streetcode_api::services::blob::BlobService;

#[derive(Parser)]
#[command(name = "streetcode-api", about = "Streetcode content-management backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server (default)
    Serve,
    /// Delete blob files no image or audio row references, then exit
    CleanBlobs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::CleanBlobs => clean_blobs().await,
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = config::config();
    info!("Starting Streetcode API in {:?} mode", config.environment);

    let pool = db::connect().context("database configuration")?;

    if config.database.run_migrations {
        // The pool is lazy; a database that is still starting up should not
        // prevent the server from binding. /health reports degraded instead.
        if let Err(e) = db::run_migrations(&pool).await {
            warn!("Migrations not applied: {}", e);
        }
    }

    let blob = BlobService::from_config().context("blob storage configuration")?;

    if let Some(hours) = config.blob.clean_interval_hours {
        spawn_blob_sweep(pool.clone(), blob.clone(), hours);
    }

    let state = AppState { pool, blob };
    let router = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Streetcode API listening on http://{}", bind_addr);
    axum::serve(listener, router).await.context("server")?;
    Ok(())
}

/// Periodic sweep of blob files that lost their database row.
fn spawn_blob_sweep(pool: sqlx::PgPool, blob: BlobService, hours: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(hours * 3600));
        // The first tick fires immediately; skip it so a fresh deploy does
        // not sweep while media is still being migrated in.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match blob.clean_unused(&pool).await {
                Ok(removed) => info!("Blob sweep removed {} unused files", removed),
                Err(e) => warn!("Blob sweep failed: {}", e),
            }
        }
    });
}

async fn clean_blobs() -> anyhow::Result<()> {
    let pool = db::connect().context("database configuration")?;
    let blob = BlobService::from_config().context("blob storage configuration")?;

    let removed = blob.clean_unused(&pool).await?;
    info!("Removed {} unused blob files", removed);
    Ok(())
}
