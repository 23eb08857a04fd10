//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use hostel_core::types::UserId;

use crate::user::UserRole;

/// A logged-in session.
///
/// Sessions are created on signup or login and end on logout or expiry.
/// The username and role are copied in at creation so a request can be
/// authorised without a join against `users`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: UserId,
    /// Username at login time.
    pub username: String,
    /// Role at login time.
    pub role: UserRole,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was ended by logout, if it was.
    pub terminated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check whether the session is still active (not terminated and not expired).
    pub fn is_active(&self) -> bool {
        self.terminated_at.is_none() && !self.is_expired()
    }

    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Data required to open a session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    /// Owning user.
    pub user_id: UserId,
    /// Username copied from the user.
    pub username: String,
    /// Role copied from the user.
    pub role: UserRole,
    /// Expiry timestamp.
    pub expires_at: DateTime<Utc>,
}
