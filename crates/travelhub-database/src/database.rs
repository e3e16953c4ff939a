//! Backend selection.

use std::sync::Arc;

use tracing::info;

use travelhub_core::config::{DatabaseBackend, DatabaseConfig};
use travelhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryBookingRepository, MemoryDestinationRepository, MemoryUserRepository};
use crate::migration::run_migrations;
use crate::postgres::{PgBookingRepository, PgDestinationRepository, PgUserRepository};
use crate::repositories::{BookingRepository, DestinationRepository, UserRepository};

/// The set of repositories for the configured backend.
#[derive(Debug, Clone)]
pub struct Database {
    destinations: Arc<dyn DestinationRepository>,
    bookings: Arc<dyn BookingRepository>,
    users: Arc<dyn UserRepository>,
    pool: Option<DatabasePool>,
}

impl Database {
    /// Open the backend named in the configuration.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                Ok(Self::postgres(pool))
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory storage; data will not survive a restart");
                Ok(Self::in_memory())
            }
        }
    }

    /// Repositories over an existing PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            destinations: Arc::new(PgDestinationRepository::new(pg.clone())),
            bookings: Arc::new(PgBookingRepository::new(pg.clone())),
            users: Arc::new(PgUserRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Fresh, empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            destinations: Arc::new(MemoryDestinationRepository::new()),
            bookings: Arc::new(MemoryBookingRepository::new()),
            users: Arc::new(MemoryUserRepository::new()),
            pool: None,
        }
    }

    /// Destination repository.
    pub fn destinations(&self) -> Arc<dyn DestinationRepository> {
        Arc::clone(&self.destinations)
    }

    /// Booking repository.
    pub fn bookings(&self) -> Arc<dyn BookingRepository> {
        Arc::clone(&self.bookings)
    }

    /// User repository.
    pub fn users(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.users)
    }

    /// Short backend name for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Apply pending migrations. A no-op for the in-memory backend.
    pub async fn migrate(&self) -> AppResult<()> {
        match &self.pool {
            Some(pool) => run_migrations(pool.pool()).await,
            None => Ok(()),
        }
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
