//! Route definitions for the TravelHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::Router;
use axum::routing::{get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` router. Middleware is added by [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(destination_routes())
        .merge(booking_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Public catalog and review submission
fn destination_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/destinations",
            get(handlers::destination::list_destinations),
        )
        .route(
            "/destinations/meta",
            get(handlers::destination::destination_meta),
        )
        .route(
            "/destinations/{id}",
            get(handlers::destination::get_destination),
        )
        .route(
            "/destinations/{id}/review",
            post(handlers::destination::submit_review),
        )
}

/// Booking lifecycle
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create_booking))
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route(
            "/bookings/{id}/cancel",
            put(handlers::booking::cancel_booking),
        )
        .route(
            "/bookings/{id}/status",
            put(handlers::booking::update_status),
        )
        .route(
            "/bookings/{id}/payment",
            put(handlers::booking::update_payment),
        )
        .route(
            "/bookings/user/{id}",
            get(handlers::booking::list_user_bookings),
        )
}

/// Admin catalog and booking management
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/destinations",
            get(handlers::admin::list_destinations).post(handlers::admin::create_destination),
        )
        .route(
            "/admin/destinations/{id}",
            put(handlers::admin::update_destination).delete(handlers::admin::delete_destination),
        )
        .route("/admin/bookings", get(handlers::admin::list_bookings))
        .route(
            "/admin/bookings/{id}/status",
            put(handlers::admin::update_booking_status),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
