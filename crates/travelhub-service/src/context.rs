//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use travelhub_core::types::UserId;
use travelhub_entity::user::UserRole;

/// Who is acting on the current request.
///
/// Built by the HTTP layer from the access token and passed into every
/// service method that needs an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Role at the time the token was issued.
    pub role: UserRole,
    /// Display name from the token.
    pub name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole, name: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            name: name.into(),
            request_time: Utc::now(),
        }
    }

    /// Context for maintenance tasks run outside HTTP, such as seeding.
    pub fn system() -> Self {
        Self::new(UserId::from_uuid(uuid::Uuid::nil()), UserRole::Admin, "system")
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
