//! # travelhub-auth
//!
//! Authentication and authorization for TravelHub.
//!
//! ## Modules
//!
//! - `jwt`: access token creation and validation
//! - `password`: Argon2id hashing and the minimum-length policy
//! - `policy`: the owner-or-admin rule shared by bookings and reviews

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{Access, authorize_owner_or_admin, authorize_status_change};
