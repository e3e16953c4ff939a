//! Core type definitions used across the TravelHub workspace.

pub mod id;

pub use id::*;
