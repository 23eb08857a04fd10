//! # hostel-auth
//!
//! Identity and session layer for the hostel booking service.
//!
//! ## Modules
//!
//! - `jwt`: session token creation and validation
//! - `session`: signup, login, logout, and session validation
//! - `rbac`: role checks for administrative operations

pub mod jwt;
pub mod rbac;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use rbac::RbacEnforcer;
pub use session::{LoginResult, SessionCleanup, SessionManager};
