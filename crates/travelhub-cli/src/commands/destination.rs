//! Destination catalog inspection.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use travelhub_api::AppState;
use travelhub_core::config::AppConfig;
use travelhub_core::error::AppError;
use travelhub_entity::destination::Destination;
use travelhub_service::RequestContext;

use crate::output::{self, OutputFormat};

/// Arguments for destination commands
#[derive(Debug, Args)]
pub struct DestinationArgs {
    /// Destination subcommand
    #[command(subcommand)]
    pub command: DestinationCommand,
}

/// Destination subcommands
#[derive(Debug, Subcommand)]
pub enum DestinationCommand {
    /// List every destination, including unavailable ones
    List,
}

/// One row of `destination list`.
#[derive(Debug, Serialize, Tabled)]
pub struct DestinationRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Price/day")]
    pub price: String,
    #[tabled(rename = "Rating")]
    pub rating: String,
    #[tabled(rename = "Reviews")]
    pub reviews: usize,
    #[tabled(rename = "Available")]
    pub available: bool,
}

impl From<Destination> for DestinationRow {
    fn from(d: Destination) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name,
            country: d.country,
            category: d.category.to_string(),
            price: format!("{:.2}", d.price),
            rating: format!("{:.1}", d.rating),
            reviews: d.reviews.len(),
            available: d.available,
        }
    }
}

/// Execute destination commands
pub async fn execute(
    args: &DestinationArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let database = super::open_database(&config).await?;
    let state = AppState::new(config, database.clone());

    match &args.command {
        DestinationCommand::List => {
            let rows: Vec<DestinationRow> = state
                .catalog
                .list_all(&RequestContext::system())
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output::print_list(&rows, format);
        }
    }

    database.close().await;
    Ok(())
}
