//! # hostel-database
//!
//! SQLite connection management, migrations, grid seeding, and concrete
//! repository implementations for rooms, bookings, users, and sessions.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
