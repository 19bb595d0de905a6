// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Frame preamble and start code: 0x00 0x00 0xFF
pub const START_CODE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const POSTAMBLE: u8 = 0x00;

/// Length marker announcing an extended frame
pub const EXTENDED_MARKER: [u8; 2] = [0xFF, 0xFF];

/// ACK frame exchanged in both directions
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Largest payload carried by a normal frame
pub const NORMAL_MAX_PAYLOAD_LEN: usize = 255;

/// Largest payload an extended frame can describe (LEN also counts the TFI)
pub const EXTENDED_MAX_PAYLOAD_LEN: usize = 0xFFFF - 1;

/// Minimal normal frame: start(3) + len(1) + lcs(1) + tfi(1) + dcs(1) + postamble(1)
pub const NORMAL_MIN_FRAME_LEN: usize = 8;

/// Minimal extended frame: start(3) + marker(2) + len(2) + lcs(1) + tfi(1) + dcs(1) + postamble(1)
pub const EXTENDED_MIN_FRAME_LEN: usize = 11;

/// Host->chip frame identifier
pub const TFI_HOST: u8 = 0xD4;
/// Chip->host frame identifier
pub const TFI_CHIP: u8 = 0xD5;

// Command codes. The chip echoes `code + 1` in its response.

/// WriteRegister
pub const CMD_WRITE_REGISTER: u8 = 0x08;
/// SAMConfiguration
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// RFConfiguration
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
/// InDataExchange
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
/// InCommunicateThru
pub const CMD_IN_COMMUNICATE_THRU: u8 = 0x42;
/// InListPassiveTarget
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// CIU_BitFraming register (0x633D)
pub const REG_BIT_FRAMING: [u8; 2] = [0x63, 0x3D];

/// Initial CRC_A register value (ISO/IEC 14443-3)
pub const CRC_A_INIT: u16 = 0x6363;

/// Number of zero bytes written ahead of the wake-up ACK
pub const LONG_PREAMBLE_LEN: usize = 20;

/// Default number of bytes requested per transport read
pub const DEFAULT_READ_LEN: usize = 288;
