//! In-memory user repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::UserId;
use travelhub_entity::user::{CreateUser, User};

use crate::repositories::UserRepository;

/// User storage with a unique email index.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    rows: Arc<DashMap<UserId, User>>,
    by_email: Arc<DashMap<String, UserId>>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.rows.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.by_email.get(&email.to_lowercase()).map(|id| *id) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.rows.get(id).map(|u| u.clone()))
            .collect())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let email = data.email.to_lowercase();
        match self.by_email.entry(email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Email '{email}' is already registered"
            ))),
            Entry::Vacant(slot) => {
                let user = User {
                    id: UserId::new(),
                    name: data.name.clone(),
                    email,
                    password_hash: data.password_hash.clone(),
                    role: data.role,
                    created_at: Utc::now(),
                };
                self.rows.insert(user.id, user.clone());
                slot.insert(user.id);
                Ok(user)
            }
        }
    }
}
