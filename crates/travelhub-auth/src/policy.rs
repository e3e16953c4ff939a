//! Owner-or-admin access policy.
//!
//! One decision function shared by every booking operation. Review
//! eligibility builds on it through the completed-booking check in the
//! service layer.

use travelhub_core::error::AppError;
use travelhub_core::types::UserId;
use travelhub_entity::booking::BookingStatus;
use travelhub_entity::user::UserRole;

/// Why access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The caller owns the resource.
    Owner,
    /// The caller is an administrator.
    Admin,
}

/// Allow the resource owner or any administrator.
pub fn authorize_owner_or_admin(
    caller: UserId,
    role: UserRole,
    owner: UserId,
) -> Result<Access, AppError> {
    if role.is_admin() {
        Ok(Access::Admin)
    } else if caller == owner {
        Ok(Access::Owner)
    } else {
        Err(AppError::forbidden("Not authorized to access this booking"))
    }
}

/// Decide whether the caller may request a move to `target`.
///
/// Owners may only cancel. Whether the transition itself is legal is
/// checked separately by the state machine.
pub fn authorize_status_change(
    caller: UserId,
    role: UserRole,
    owner: UserId,
    target: BookingStatus,
) -> Result<Access, AppError> {
    let access = authorize_owner_or_admin(caller, role, owner)?;
    if access == Access::Owner && target != BookingStatus::Cancelled {
        return Err(AppError::forbidden(
            "Only administrators can change a booking to this status",
        ));
    }
    Ok(access)
}
