//! Small helpers for hex display and timeouts.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
