//! Database migration management commands.

use clap::{Args, Subcommand};
use tracing::info;

use travelhub_core::config::AppConfig;
use travelhub_core::error::AppError;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    let database = super::open_database(config).await?;

    match &args.command {
        MigrateCommand::Run => {
            if database.backend_name() == "memory" {
                output::print_warning("In-memory backend configured; nothing to migrate.");
                return Ok(());
            }
            info!(backend = database.backend_name(), "Running database migrations");
            database.migrate().await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    database.close().await;
    Ok(())
}
