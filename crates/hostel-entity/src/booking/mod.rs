//! Booking ledger entities.

pub mod model;

pub use model::{Booking, UpdateBooking};
