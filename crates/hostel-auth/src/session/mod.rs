//! Session lifecycle: signup, login, logout, validation, and cleanup.

pub mod cleanup;
pub mod manager;

pub use cleanup::SessionCleanup;
pub use manager::{LoginResult, SessionManager};
