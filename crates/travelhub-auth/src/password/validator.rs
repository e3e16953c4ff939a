//! Password policy for new accounts.

use travelhub_core::config::AuthConfig;
use travelhub_core::error::AppError;

/// Checks new passwords against the configured minimum length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a candidate password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if password.trim().is_empty() {
            return Err(AppError::validation("Password must not be blank"));
        }
        Ok(())
    }
}
