//! # hostel-service
//!
//! Business logic service layer for the hostel booking service. Each service
//! orchestrates repositories and role checks to implement one group of
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod allocation;
pub mod context;
pub mod inventory;
pub mod user;

pub use allocation::{AllocationService, RoomLocks};
pub use context::RequestContext;
pub use inventory::InventoryService;
pub use user::{AdminOverview, UserService};
