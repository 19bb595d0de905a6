// Shared helpers for the integration test crates.
#![allow(dead_code)]

pub mod fixtures;

pub use libpn532::test_support::{chip_response, initialized_mock_controller};
