//! PostgreSQL user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::UserId;
use travelhub_entity::user::{CreateUser, User};

use super::db_error;
use crate::repositories::UserRepository;

/// User storage in the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_uuid()).collect();
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to load users"))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let email = data.email.to_lowercase();
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(UserId::new())
        .bind(&data.name)
        .bind(&email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict(format!("Email '{email}' is already registered"))
            }
            other => AppError::with_source(
                travelhub_core::error::ErrorKind::Database,
                "Failed to create user",
                other,
            ),
        })
    }
}
