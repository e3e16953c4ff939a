//! CLI command definitions and dispatch.

pub mod admin;
pub mod destination;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use travelhub_core::config::AppConfig;
use travelhub_core::error::AppError;
use travelhub_database::Database;

use crate::output::OutputFormat;

/// TravelHub: destination catalog and booking platform
#[derive(Debug, Parser)]
#[command(name = "travelhub", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the TravelHub server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Load the sample destination catalog
    Seed(seed::SeedArgs),
    /// Admin user management
    Admin(admin::AdminArgs),
    /// Destination catalog inspection
    Destination(destination::DestinationArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Seed(args) => seed::execute(args, config).await,
            Commands::Admin(args) => admin::execute(args, config).await,
            Commands::Destination(args) => destination::execute(args, config, self.format).await,
        }
    }
}

/// Helper: open the configured backend
pub async fn open_database(config: &AppConfig) -> Result<Database, AppError> {
    Database::connect(&config.database).await
}

/// Helper: interactive input errors are reported as internal errors
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}
