//! Account listings for the admin views.

pub mod service;

pub use service::{AdminOverview, UserService};
