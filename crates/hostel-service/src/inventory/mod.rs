//! Room inventory queries.

pub mod service;

pub use service::InventoryService;
