//! Load the sample destination catalog.

use clap::Args;
use tracing::{debug, info};

use travelhub_api::AppState;
use travelhub_core::config::AppConfig;
use travelhub_core::error::{AppError, ErrorKind};
use travelhub_service::RequestContext;
use travelhub_service::account::Registration;
use travelhub_service::catalog::DestinationInput;

use crate::output;

const SAMPLE_CATALOG: &str = include_str!("../../data/destinations.json");

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Delete all bookings and destinations first
    #[arg(long)]
    pub reset: bool,

    /// Also create an admin account with this email
    #[arg(long, requires = "admin_password")]
    pub admin_email: Option<String>,

    /// Password for `--admin-email`
    #[arg(long)]
    pub admin_password: Option<String>,
}

/// Parse the bundled catalog.
pub fn sample_catalog() -> Result<Vec<DestinationInput>, AppError> {
    Ok(serde_json::from_str(SAMPLE_CATALOG)?)
}

/// Insert the bundled catalog through the catalog service.
pub async fn seed_catalog(state: &AppState) -> Result<usize, AppError> {
    let ctx = RequestContext::system();
    let catalog = sample_catalog()?;
    let count = catalog.len();
    for input in catalog {
        let created = state.catalog.create(&ctx, input).await?;
        debug!(destination_id = %created.id, name = %created.name, "Seeded destination");
    }
    Ok(count)
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, config: AppConfig) -> Result<(), AppError> {
    let database = super::open_database(&config).await?;
    if database.backend_name() == "memory" {
        output::print_warning("In-memory backend configured; seeded data is discarded on exit.");
    }
    database.migrate().await?;

    if args.reset {
        let bookings = database.bookings().delete_all().await?;
        let destinations = database.destinations().delete_all().await?;
        info!(bookings, destinations, "Catalog reset before seeding");
        output::print_success(&format!(
            "Cleared {bookings} booking(s) and {destinations} destination(s)"
        ));
    }

    let state = AppState::new(config, database.clone());
    let count = seed_catalog(&state).await?;
    output::print_success(&format!("Seeded {count} destinations"));

    if let (Some(email), Some(password)) = (&args.admin_email, &args.admin_password) {
        let registration = Registration {
            name: "Admin User".to_string(),
            email: email.clone(),
            password: password.clone(),
        };
        match state.accounts.create_admin(registration).await {
            Ok(user) => output::print_success(&format!("Created admin user {}", user.email)),
            Err(e) if e.is(ErrorKind::Conflict) => {
                output::print_warning(&format!("Admin user {email} already exists"))
            }
            Err(e) => return Err(e),
        }
    }

    database.close().await;
    Ok(())
}
