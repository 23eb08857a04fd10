//! RBAC enforcement logic: checks whether a role may perform an operation.

use hostel_core::error::AppError;
use hostel_entity::user::UserRole;

/// Enforces role checks for administrative operations.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ok(())` for admins and `Authorization` for everyone else.
    pub fn require_admin(&self, role: &UserRole) -> Result<(), AppError> {
        if role.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' may not perform administrative operations"
            )))
        }
    }

    /// Returns whether the role is an admin.
    pub fn is_admin(&self, role: &UserRole) -> bool {
        role.is_admin()
    }
}
