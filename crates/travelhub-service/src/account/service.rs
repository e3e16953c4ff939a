//! Account service.

use std::sync::Arc;

use tracing::{info, warn};

use travelhub_auth::jwt::{IssuedToken, JwtEncoder};
use travelhub_auth::password::{PasswordHasher, PasswordValidator};
use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_database::UserRepository;
use travelhub_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Data for a new account.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// A signed-in user and their access token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The user.
    pub user: User,
    /// Bearer token for subsequent requests.
    pub token: IssuedToken,
}

/// Registers users and issues access tokens.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
        }
    }

    /// Register a traveller account and sign it in.
    pub async fn register(&self, registration: Registration) -> AppResult<AuthSession> {
        let user = self.create_user(registration, UserRole::User).await?;
        info!(user_id = %user.id, "User registered");
        self.session_for(user)
    }

    /// Create an administrator account (used by the CLI).
    pub async fn create_admin(&self, registration: Registration) -> AppResult<User> {
        let user = self.create_user(registration, UserRole::Admin).await?;
        info!(user_id = %user.id, email = %user.email, "Admin user created");
        Ok(user)
    }

    /// Verify credentials and issue a token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let email = email.trim().to_lowercase();
        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!(email = %email, "Login failed: unknown email");
            return Err(AppError::unauthorized("Invalid email or password"));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        info!(user_id = %user.id, "User logged in");
        self.session_for(user)
    }

    /// The caller's own account.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn create_user(&self, registration: Registration, role: UserRole) -> AppResult<User> {
        let name = registration.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        let email = registration.email.trim().to_lowercase();
        if !looks_like_email(&email) {
            return Err(AppError::validation("A valid email is required"));
        }
        self.validator.validate(&registration.password)?;

        let password_hash = self.hasher.hash_password(&registration.password)?;
        self.users
            .create(&CreateUser {
                name,
                email,
                password_hash,
                role,
            })
            .await
    }

    fn session_for(&self, user: User) -> AppResult<AuthSession> {
        let token = self.encoder.issue(user.id, user.role, &user.name)?;
        Ok(AuthSession { user, token })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
