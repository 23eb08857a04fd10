//! Core type definitions used across the hostel workspace.

pub mod id;

pub use id::*;
