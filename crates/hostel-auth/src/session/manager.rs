//! Session lifecycle manager: signup, login, logout, and token validation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use hostel_core::config::{AuthConfig, SessionConfig};
use hostel_core::error::AppError;
use hostel_database::repositories::{SessionRepository, UserRepository};
use hostel_entity::session::{CreateSession, Session};
use hostel_entity::user::{CreateUser, User, UserRole};

use crate::jwt::{JwtDecoder, JwtEncoder};

/// Result of a successful signup or login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed session token.
    pub token: String,
    /// Created session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Manages the complete session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// Session configuration.
    session_config: SessionConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session_config", &self.session_config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            user_repo,
            session_repo,
            session_config,
        }
    }

    /// Creates a `user`-role account and logs it in.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResult, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: email.trim().to_string(),
                password: password.to_string(),
                role: UserRole::User,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User signed up");

        self.open_session(user).await
    }

    /// Checks credentials and opens a session.
    ///
    /// When `role` is given the account must hold exactly that role. Every
    /// failure reports the same message so callers cannot probe usernames.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        role: Option<UserRole>,
    ) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        if user.password != password {
            warn!(username = %user.username, "Login rejected: wrong password");
            return Err(AppError::authentication("Invalid credentials"));
        }
        if role.is_some_and(|r| r != user.role) {
            warn!(username = %user.username, "Login rejected: role mismatch");
            return Err(AppError::authentication("Invalid credentials"));
        }

        let result = self.open_session(user).await?;
        info!(
            user_id = %result.user.id,
            session_id = %result.session.id,
            "Login successful"
        );
        Ok(result)
    }

    /// Terminates a session. Ending an already ended session is not an error.
    pub async fn logout(&self, session_id: Uuid) -> Result<(), AppError> {
        if self.session_repo.terminate(session_id).await? {
            info!(session_id = %session_id, "Logout completed");
        }
        Ok(())
    }

    /// Resolves a token to its active session.
    pub async fn validate(&self, token: &str) -> Result<Session, AppError> {
        let claims = self.jwt_decoder.decode_token(token)?;

        let session = self
            .session_repo
            .find_by_id(claims.session_id())
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;

        if session.terminated_at.is_some() {
            return Err(AppError::authentication("Session has been terminated"));
        }
        if session.is_expired() {
            return Err(AppError::authentication("Session has expired"));
        }
        Ok(session)
    }

    /// Creates the configured admin account if it does not exist yet.
    pub async fn ensure_admin(&self, config: &AuthConfig) -> Result<User, AppError> {
        let (user, created) = self
            .user_repo
            .ensure(&CreateUser {
                username: config.admin_username.clone(),
                email: config.admin_email.clone(),
                password: config.admin_password.clone(),
                role: UserRole::Admin,
            })
            .await?;

        if created {
            info!(username = %user.username, "Bootstrap admin account created");
        } else if !user.is_admin() {
            warn!(
                username = %user.username,
                "Configured admin username belongs to a non-admin account"
            );
        }
        Ok(user)
    }

    async fn open_session(&self, user: User) -> Result<LoginResult, AppError> {
        let expires_at = Utc::now() + Duration::hours(self.session_config.ttl_hours as i64);
        let session = self
            .session_repo
            .create(&CreateSession {
                user_id: user.id,
                username: user.username.clone(),
                role: user.role,
                expires_at,
            })
            .await?;

        let token = self.jwt_encoder.generate_token(&session)?;
        Ok(LoginResult {
            token,
            session,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::config::DatabaseConfig;
    use hostel_core::error::ErrorKind;
    use hostel_database::DatabasePool;
    use hostel_database::migration::run_migrations;

    async fn manager() -> SessionManager {
        let db = DatabasePool::connect(&DatabaseConfig {
            url: "sqlite::memory:".into(),
            ..DatabaseConfig::default()
        })
        .await
        .unwrap();
        run_migrations(db.pool()).await.unwrap();
        let pool = db.into_pool();

        let auth = AuthConfig::default();
        SessionManager::new(
            Arc::new(JwtEncoder::new(&auth)),
            Arc::new(JwtDecoder::new(&auth)),
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(SessionRepository::new(pool)),
            SessionConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_signup_then_validate() {
        let manager = manager().await;
        let result = manager
            .signup("amina", "amina@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(result.user.role, UserRole::User);

        let session = manager.validate(&result.token).await.unwrap();
        assert_eq!(session.username, "amina");
    }

    #[tokio::test]
    async fn test_duplicate_signup() {
        let manager = manager().await;
        manager.signup("amina", "a@example.com", "pw").await.unwrap();
        let err = manager
            .signup("amina", "b@example.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateIdentity);
    }

    #[tokio::test]
    async fn test_signup_requires_fields() {
        let manager = manager().await;
        let err = manager.signup("  ", "a@example.com", "pw").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = manager.signup("amina", "a@example.com", "").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_login_checks_password_and_role() {
        let manager = manager().await;
        manager.signup("amina", "a@example.com", "pw").await.unwrap();

        assert!(manager.login("amina", "pw", None).await.is_ok());
        assert!(manager.login("amina", "pw", Some(UserRole::User)).await.is_ok());

        let err = manager.login("amina", "nope", None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        let err = manager
            .login("amina", "pw", Some(UserRole::Admin))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        let err = manager.login("ghost", "pw", None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let manager = manager().await;
        let result = manager.signup("amina", "a@example.com", "pw").await.unwrap();

        manager.logout(result.session.id).await.unwrap();
        manager.logout(result.session.id).await.unwrap();

        let err = manager.validate(&result.token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_ensure_admin() {
        let manager = manager().await;
        let config = AuthConfig::default();

        let admin = manager.ensure_admin(&config).await.unwrap();
        assert!(admin.is_admin());
        manager.ensure_admin(&config).await.unwrap();

        let result = manager
            .login(&config.admin_username, &config.admin_password, Some(UserRole::Admin))
            .await
            .unwrap();
        assert!(result.session.role.is_admin());
    }
}
