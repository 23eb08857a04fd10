//! # hostel-entity
//!
//! Domain entity models for the hostel booking service. Every struct in this
//! crate represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow`.

pub mod booking;
pub mod room;
pub mod session;
pub mod user;
