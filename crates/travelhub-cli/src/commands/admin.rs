//! Admin user management commands.

use clap::{Args, Subcommand};

use travelhub_api::AppState;
use travelhub_core::config::AppConfig;
use travelhub_core::error::AppError;
use travelhub_service::account::Registration;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin user
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Login email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: AppConfig) -> Result<(), AppError> {
    let database = super::open_database(&config).await?;
    let state = AppState::new(config, database.clone());

    match &args.command {
        AdminCommand::Create {
            name,
            email,
            password,
        } => {
            let name = match name {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin name")
                    .default("Admin User".to_string())
                    .interact_text()
                    .map_err(super::input_error)?,
            };

            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin email")
                    .interact_text()
                    .map_err(super::input_error)?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(super::input_error)?,
            };

            let user = state
                .accounts
                .create_admin(Registration {
                    name,
                    email,
                    password,
                })
                .await?;

            output::print_success(&format!("Admin user '{}' created", user.name));
            output::print_kv("ID", &user.id.to_string());
            output::print_kv("Email", &user.email);
        }
    }

    database.close().await;
    Ok(())
}
