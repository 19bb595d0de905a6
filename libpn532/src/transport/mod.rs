// libpn532/src/transport/mod.rs

/// In-memory transport for tests.
pub mod mock;
/// The `Transport` trait.
pub mod traits;
/// USB bulk transport (feature `usb`).
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::MockTransport;
pub use traits::Transport;
#[cfg(feature = "usb")]
pub use usb::UsbTransport;
