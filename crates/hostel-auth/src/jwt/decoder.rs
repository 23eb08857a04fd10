//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use hostel_core::config::AuthConfig;
use hostel_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
///
/// Revocation is not tracked here; a token is only honoured while its
/// session row is active.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::jwt::JwtEncoder;
    use hostel_core::error::ErrorKind;
    use hostel_core::types::UserId;
    use hostel_entity::session::Session;
    use hostel_entity::user::UserRole;

    fn session(expires_in: Duration) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            user_id: UserId(7),
            username: "amina".into(),
            role: UserRole::User,
            created_at: now,
            expires_at: now + expires_in,
            terminated_at: None,
        }
    }

    #[test]
    fn test_token_carries_session() {
        let config = AuthConfig::default();
        let session = session(Duration::hours(1));
        let token = JwtEncoder::new(&config).generate_token(&session).unwrap();

        let claims = JwtDecoder::new(&config).decode_token(&token).unwrap();
        assert_eq!(claims.session_id(), session.id);
        assert_eq!(claims.user_id(), UserId(7));
        assert_eq!(claims.username, "amina");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = JwtEncoder::new(&AuthConfig::default())
            .generate_token(&session(Duration::hours(1)))
            .unwrap();
        let other = AuthConfig {
            jwt_secret: "another-secret".into(),
            ..AuthConfig::default()
        };
        let err = JwtDecoder::new(&other).decode_token(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = AuthConfig::default();
        let token = JwtEncoder::new(&config)
            .generate_token(&session(Duration::hours(-1)))
            .unwrap();
        assert!(JwtDecoder::new(&config).decode_token(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = JwtDecoder::new(&AuthConfig::default())
            .decode_token("not-a-token")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
