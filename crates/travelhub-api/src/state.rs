//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use travelhub_auth::jwt::{JwtDecoder, JwtEncoder};
use travelhub_auth::password::{PasswordHasher, PasswordValidator};
use travelhub_core::config::AppConfig;
use travelhub_database::Database;
use travelhub_service::{AccountService, BookingService, CatalogService, ReviewService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the process started serving
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// Repositories for the configured backend
    pub database: Database,

    // ── Auth ─────────────────────────────────────────────────
    /// Access token validation
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Destination catalog
    pub catalog: Arc<CatalogService>,
    /// Booking lifecycle
    pub bookings: Arc<BookingService>,
    /// Review submission
    pub reviews: Arc<ReviewService>,
    /// Registration and login
    pub accounts: Arc<AccountService>,
}

impl AppState {
    /// Wire services on top of an opened database.
    pub fn new(config: AppConfig, database: Database) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));

        let catalog = Arc::new(CatalogService::new(
            database.destinations(),
            database.bookings(),
            database.users(),
        ));
        let bookings = Arc::new(BookingService::new(
            database.bookings(),
            database.destinations(),
            database.users(),
        ));
        let reviews = Arc::new(ReviewService::new(
            database.destinations(),
            database.bookings(),
            Arc::clone(&catalog),
        ));
        let accounts = Arc::new(AccountService::new(
            database.users(),
            hasher,
            validator,
            jwt_encoder,
        ));

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            database,
            jwt_decoder,
            catalog,
            bookings,
            reviews,
            accounts,
        }
    }
}
