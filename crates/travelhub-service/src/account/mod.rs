//! User accounts: registration, login, and profile lookup.

pub mod service;

pub use service::{AccountService, AuthSession, Registration};
