// libpn532/src/device/builder.rs

use crate::device::config::ControllerConfig;
use crate::device::handle::{BoxedTransport, Controller, Initialized, Uninitialized};
use crate::{Error, Result};

/// Helper to construct a Controller with optional configuration.
#[derive(Default)]
pub struct ControllerBuilder {
    transport: Option<BoxedTransport>,
    config: ControllerConfig,
}

impl ControllerBuilder {
    /// Builder with default config and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: BoxedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole config.
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Per-read timeout for ordinary commands.
    pub fn exchange_timeout_ms(mut self, ms: u64) -> Self {
        self.config.exchange_timeout_ms = ms;
        self
    }

    /// Per-read timeout for Type A polling.
    pub fn poll_timeout_ms(mut self, ms: u64) -> Self {
        self.config.poll_timeout_ms = ms;
        self
    }

    /// Bytes per read; values below 288 are raised to 288.
    pub fn read_len(mut self, len: usize) -> Self {
        self.config.read_len = len;
        self
    }

    /// Consume the builder and return an uninitialized Controller.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Controller<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Controller::with_config(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Build and initialize in one step.
    pub fn build(self) -> Result<Controller<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
