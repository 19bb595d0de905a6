// libpn532/src/error.rs

use thiserror::Error;

use crate::types::FrameKind;

/// Fatal errors. A call that returns `Err` produced no usable data; non-fatal
/// integrity findings travel as [`crate::Anomaly`] inside [`crate::Checked`].
#[derive(Error, Debug)]
pub enum Error {
    /// No matching device, or no transport configured.
    #[error("device not found")]
    DeviceNotFound,

    // rusb is an optional dependency, see the `usb` feature
    /// Failure reported by libusb.
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// Transport failure other than a timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// Nothing arrived before the deadline.
    #[error("operation timed out")]
    Timeout,

    /// The first read did not start with the ACK frame.
    #[error("no ack frame: received {received} leading bytes")]
    NoAck {
        /// Bytes in the first read.
        received: usize,
    },

    /// ACK arrived but no response frame did.
    #[error("ack received but no response frame followed")]
    NoData,

    /// Segment shorter than the minimal frame of its shape.
    #[error("short {kind} frame: expected at least {expected} bytes, got {actual}")]
    ShortFrame {
        /// Shape announced by the length marker.
        kind: FrameKind,
        /// Minimal frame length for `kind`.
        expected: usize,
        /// Segment length.
        actual: usize,
    },

    /// A second ACK came where the response frame belonged.
    #[error("second ack frame received instead of a response")]
    DuplicateAck,

    /// Bad postamble or wrong response code.
    #[error("integrity fault: {0}")]
    IntegrityFault(String),

    /// Malformed InListPassiveTarget record.
    #[error("corrupt target record: {0}")]
    CorruptRecord(String),

    /// Non-zero InDataExchange status.
    #[error("chip reported exchange status {status:#04x}")]
    StatusError {
        /// Status byte from the chip.
        status: u8,
    },

    /// Unparseable hex in an APDU script.
    #[error("invalid hex text: {0}")]
    InvalidHex(String),

    /// A read ran past the end of a buffer.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes needed.
        expected: usize,
        /// Bytes left.
        actual: usize,
    },
}

impl Error {
    /// True for failures of the link itself rather than of a frame or record.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::DeviceNotFound | Self::Transport(_) | Self::Timeout => true,
            #[cfg(feature = "usb")]
            Self::Usb(_) => true,
            _ => false,
        }
    }
}

/// Crate-wide result.
pub type Result<T> = std::result::Result<T, Error>;
