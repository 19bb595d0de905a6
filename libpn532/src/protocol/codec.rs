// libpn532/src/protocol/codec.rs

use crate::Result;
use crate::checked::Checked;
use crate::constants::TFI_CHIP;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Vec<u8> {
    Frame::encode(&cmd.encode())
}

/// Decode a chip frame and parse the contained response for the expected
/// command code. Frame and record anomalies are merged.
pub fn decode_response_frame(expected_cmd: u8, frame: &[u8]) -> Result<Checked<Response>> {
    Frame::decode(frame, TFI_CHIP)?.and_then(|f| Response::decode(expected_cmd, &f.payload))
}
