//! TravelHub Server: destination catalog, bookings and reviews.
//!
//! Main entry point that loads configuration, opens the storage backend
//! and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use travelhub_core::config::AppConfig;
use travelhub_core::error::AppError;
use travelhub_database::Database;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let base = std::env::var("TRAVELHUB_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("TRAVELHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&base, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TravelHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Storage backend ──────────────────────────────────
    tracing::info!(backend = ?config.database.backend, "Opening database...");
    let database = Database::connect(&config.database).await?;

    // ── Step 2: Migrations ───────────────────────────────────────
    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        database.migrate().await?;
        tracing::info!("Database migrations complete");
    }

    // ── Step 3: HTTP server ──────────────────────────────────────
    travelhub_api::run_server(config, database).await
}
