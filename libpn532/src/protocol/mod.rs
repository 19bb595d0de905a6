// libpn532/src/protocol/mod.rs

/// LCS, DCS and CRC_A.
pub mod checksum;
/// Command to frame and frame to response.
pub mod codec;
/// Host commands and their encoders.
pub mod commands;
/// Bounds-checked slice reader.
pub mod cursor;
/// Frame layout.
pub mod frame;
/// Chip responses and their decoders.
pub mod responses;
pub mod validator;

pub use checksum::{crc16a, dcs, lcs, with_crc16a};
pub use codec::{decode_response_frame, encode_command_frame};
pub use commands::*;
pub use cursor::Cursor;
pub use frame::{DecodedFrame, Frame};
pub use responses::*;
pub use validator::read_response;
