// libpn532/src/prelude.rs

pub use crate::card::{ApduOutcome, CardTarget, ExpectedResponse, TransactionReport};
pub use crate::device::{Controller, ControllerBuilder, ControllerConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, Frame, PassiveTarget, Response};
pub use crate::transport::Transport;
pub use crate::{Anomaly, CardType, Checked, Error, FrameKind, Result, TargetId};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
