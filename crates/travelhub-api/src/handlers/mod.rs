//! HTTP request handlers.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod destination;
pub mod health;
