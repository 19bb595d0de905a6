// libpn532/src/device/mod.rs

/// `ControllerBuilder`.
pub mod builder;
/// `ControllerConfig`.
pub mod config;
/// The controller session.
pub mod handle;

pub use builder::ControllerBuilder;
pub use config::ControllerConfig;
pub use handle::{BoxedTransport, Controller, Initialized, Uninitialized};
