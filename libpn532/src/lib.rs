// libpn532/src/lib.rs

//! libpn532
//!
//! Host-side driver for PN532 contactless controllers: frame codec, response
//! validation, and a small Type A polling and APDU exchange layer.
#![warn(missing_docs)]

/// Card session: APDU scripts against a polled target.
pub mod card;
pub mod checked;
/// Wire constants and command codes.
pub mod constants;
/// Controller session and its configuration.
pub mod device;
/// Crate error type.
pub mod error;
/// Convenience re-exports.
pub mod prelude;
/// Frames, commands and responses.
pub mod protocol;
/// Mock-controller helpers for tests.
pub mod test_support;
/// Byte transports.
pub mod transport;
/// Small shared types.
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::checked::{Anomaly, Checked};
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
