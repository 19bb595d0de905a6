// libpn532/src/protocol/responses/mod.rs

/// InDataExchange and InCommunicateThru bodies.
pub mod transfer;
/// InListPassiveTarget records.
pub mod target;

pub use transfer::{decode_in_communicate_thru, decode_in_data_exchange};
pub use target::PassiveTarget;

use crate::checked::Checked;
use crate::constants::*;
use crate::protocol::cursor::Cursor;
use crate::{Error, Result};

/// Decoded chip response. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// SAM configuration acknowledged.
    SamConfiguration,
    /// RF configuration acknowledged.
    RfConfiguration,
    /// Bytes after the echo, if any.
    WriteRegister(Vec<u8>),
    /// The target found, or `None` for an empty field.
    InListPassiveTarget(Option<PassiveTarget>),
    /// Card answer without echo and status.
    InDataExchange(Vec<u8>),
    /// Raw answer to a broadcast.
    InCommunicateThru {
        /// Chip status byte.
        status: u8,
        /// Bytes received from the field.
        data: Vec<u8>,
    },
}

/// Check the response code byte and return what follows it.
pub fn expect_echo(payload: &[u8], expected: u8) -> Result<&[u8]> {
    let mut c = Cursor::new(payload);
    match c.expect_u8(expected) {
        Ok(()) => Ok(c.rest()),
        Err(Some(actual)) => Err(Error::IntegrityFault(format!(
            "expected response code {:02x}, got {:02x}",
            expected, actual
        ))),
        Err(None) => Err(Error::IntegrityFault(format!(
            "empty response, expected code {:02x}",
            expected
        ))),
    }
}

impl Response {
    /// Decode a response payload (starting with the response code) for the
    /// given command code.
    pub fn decode(expected_cmd: u8, payload: &[u8]) -> Result<Checked<Self>> {
        let body = expect_echo(payload, expected_cmd.wrapping_add(1))?;

        match expected_cmd {
            CMD_SAM_CONFIGURATION => Ok(Checked::clean(Self::SamConfiguration)),
            CMD_RF_CONFIGURATION => Ok(Checked::clean(Self::RfConfiguration)),
            CMD_WRITE_REGISTER => Ok(Checked::clean(Self::WriteRegister(body.to_vec()))),
            CMD_IN_LIST_PASSIVE_TARGET => {
                Ok(Checked::clean(Self::InListPassiveTarget(
                    PassiveTarget::decode(body)?,
                )))
            }
            CMD_IN_DATA_EXCHANGE => Ok(Checked::clean(Self::InDataExchange(
                decode_in_data_exchange(body)?,
            ))),
            CMD_IN_COMMUNICATE_THRU => {
                let (status, data) = decode_in_communicate_thru(body)?;
                Ok(Checked::clean(Self::InCommunicateThru { status, data }))
            }
            other => Err(Error::IntegrityFault(format!(
                "no decoder for command {:02x}",
                other
            ))),
        }
    }

    /// Response code byte for this variant (command code + 1).
    pub fn response_code(&self) -> u8 {
        let cmd = match self {
            Self::SamConfiguration => CMD_SAM_CONFIGURATION,
            Self::RfConfiguration => CMD_RF_CONFIGURATION,
            Self::WriteRegister(_) => CMD_WRITE_REGISTER,
            Self::InListPassiveTarget(_) => CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange(_) => CMD_IN_DATA_EXCHANGE,
            Self::InCommunicateThru { .. } => CMD_IN_COMMUNICATE_THRU,
        };
        cmd.wrapping_add(1)
    }
}
