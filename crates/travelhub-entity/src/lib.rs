//! # travelhub-entity
//!
//! Domain entity models for TravelHub. Every struct in this crate
//! represents a database row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.
//!
//! The rules that must hold no matter which backend stores the data
//! (booking state machine, stay pricing, rating aggregation, catalog
//! filtering) live here as plain functions and methods.

pub mod booking;
pub mod destination;
pub mod user;
