//! Room allocation: the booking ledger and its capacity invariant.

pub mod locks;
pub mod service;

pub use locks::{RoomGuard, RoomLocks};
pub use service::AllocationService;
