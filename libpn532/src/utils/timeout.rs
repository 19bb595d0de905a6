//! Timeouts used by the controller.

use std::time::Duration;

/// Wait for ACK and response of an ordinary command.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u64 = 500;

/// InListPassiveTarget waits for a card to enter the field.
pub const POLL_TIMEOUT_MS: u64 = 5000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
