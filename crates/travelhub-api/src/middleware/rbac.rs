//! RBAC helper for admin-only routes.

use travelhub_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelhub_core::types::UserId;
    use travelhub_entity::user::UserRole;
    use travelhub_service::RequestContext;

    #[test]
    fn test_require_admin() {
        let admin = AuthUser(RequestContext::new(UserId::new(), UserRole::Admin, "Ada"));
        let user = AuthUser(RequestContext::new(UserId::new(), UserRole::User, "Bo"));
        assert!(require_admin(&admin).is_ok());
        let err = require_admin(&user).unwrap_err();
        assert_eq!(err.message, "Admin access required");
    }
}
