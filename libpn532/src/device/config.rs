// libpn532/src/device/config.rs

use crate::constants::{DEFAULT_READ_LEN, LONG_PREAMBLE_LEN};
use crate::utils::{DEFAULT_EXCHANGE_TIMEOUT_MS, POLL_TIMEOUT_MS};

/// Tunables of a controller session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Per-read timeout for ordinary commands.
    pub exchange_timeout_ms: u64,
    /// Per-read timeout for InListPassiveTarget.
    pub poll_timeout_ms: u64,
    /// Bytes requested from the transport per read.
    pub read_len: usize,
    /// Zero bytes sent ahead of the wake-up ACK.
    pub preamble_len: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            exchange_timeout_ms: DEFAULT_EXCHANGE_TIMEOUT_MS,
            poll_timeout_ms: POLL_TIMEOUT_MS,
            read_len: DEFAULT_READ_LEN,
            preamble_len: LONG_PREAMBLE_LEN,
        }
    }
}

impl ControllerConfig {
    /// Raise values below the chip's minimums.
    ///
    /// A read must hold ACK plus a full-size normal frame, and the chip needs
    /// at least the long preamble to leave power-down.
    pub fn normalized(self) -> Self {
        Self {
            read_len: self.read_len.max(DEFAULT_READ_LEN),
            preamble_len: self.preamble_len.max(LONG_PREAMBLE_LEN),
            ..self
        }
    }
}
