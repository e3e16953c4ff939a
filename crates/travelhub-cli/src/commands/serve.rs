//! Start the TravelHub server.

use clap::Args;

use travelhub_core::config::AppConfig;
use travelhub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting TravelHub server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let database = super::open_database(&config).await?;

    if config.database.run_migrations && !args.no_migrate {
        println!("Running database migrations...");
        database.migrate().await?;
        println!("  Migrations applied successfully.");
    }

    travelhub_api::run_server(config, database).await
}
