//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hostel_core::types::UserId;
use hostel_entity::session::Session;
use hostel_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting and from *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's role at login.
    pub role: UserRole,
    /// The username, which is also the booking holder identity.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, session_id: Uuid, role: UserRole, username: String) -> Self {
        Self {
            user_id,
            session_id,
            role,
            username,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&Session> for RequestContext {
    fn from(session: &Session) -> Self {
        Self::new(
            session.user_id,
            session.id,
            session.role,
            session.username.clone(),
        )
    }
}
