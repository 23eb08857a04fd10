//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Username of the bootstrap admin account.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Password of the bootstrap admin account.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Email of the bootstrap admin account.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            admin_email: default_admin_email(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "CHANGE_ME_ADMIN".to_string()
}

fn default_admin_email() -> String {
    "admin@localhost".to_string()
}
