// libpn532/src/protocol/commands/sam.rs

use crate::constants::CMD_SAM_CONFIGURATION;

/// SAM operating mode. The driver runs without a SAM.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    /// No SAM in use.
    Normal = 0x01,
}

/// Encode SAMConfiguration (0x14). The driver always sends timeout 0.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8) -> Vec<u8> {
    vec![CMD_SAM_CONFIGURATION, mode as u8, timeout]
}
