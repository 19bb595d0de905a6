// libpn532/src/protocol/commands/mod.rs

/// Target and register commands.
pub mod exchange;
/// RFConfiguration.
pub mod rf;
/// SAMConfiguration.
pub mod sam;

pub use exchange::{
    encode_in_communicate_thru, encode_in_data_exchange, encode_in_list_passive_target,
    encode_write_register,
};
pub use rf::{RfItem, encode_rf_configuration};
pub use sam::{SamMode, encode_sam_configuration};

use crate::types::CardType;

/// High-level Command enum. New commands should be added here and their
/// encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SAMConfiguration (0x14).
    SamConfiguration {
        /// Operating mode.
        mode: SamMode,
        /// Virtual-card timeout, 0 otherwise.
        timeout: u8,
    },
    /// RFConfiguration (0x32) for one item.
    RfConfiguration(RfItem),
    /// InListPassiveTarget (0x4A) for one target.
    InListPassiveTarget(CardType),
    /// WriteRegister (0x08).
    WriteRegister {
        /// Big-endian register address.
        address: [u8; 2],
        /// New register value.
        value: u8,
    },
    /// Raw bytes sent to the field; CRC_A is appended during encoding.
    InCommunicateThru(Vec<u8>),
    /// Target number followed by the data for the target.
    InDataExchange(Vec<u8>),
}

impl Command {
    /// Return the command code byte.
    pub fn command_code(&self) -> u8 {
        use crate::constants::*;
        match self {
            Self::SamConfiguration { .. } => CMD_SAM_CONFIGURATION,
            Self::RfConfiguration(_) => CMD_RF_CONFIGURATION,
            Self::InListPassiveTarget(_) => CMD_IN_LIST_PASSIVE_TARGET,
            Self::WriteRegister { .. } => CMD_WRITE_REGISTER,
            Self::InCommunicateThru(_) => CMD_IN_COMMUNICATE_THRU,
            Self::InDataExchange(_) => CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the frame payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SamConfiguration { mode, timeout } => encode_sam_configuration(*mode, *timeout),
            Self::RfConfiguration(item) => encode_rf_configuration(*item),
            Self::InListPassiveTarget(card_type) => encode_in_list_passive_target(*card_type),
            Self::WriteRegister { address, value } => encode_write_register(*address, *value),
            Self::InCommunicateThru(data) => encode_in_communicate_thru(data),
            Self::InDataExchange(data) => encode_in_data_exchange(data),
        }
    }
}
