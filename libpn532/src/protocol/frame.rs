// libpn532/src/protocol/frame.rs

use crate::checked::{Anomaly, Checked};
use crate::constants::{
    ACK_FRAME, EXTENDED_MARKER, EXTENDED_MAX_PAYLOAD_LEN, POSTAMBLE, START_CODE, TFI_HOST,
};
use crate::protocol::checksum::{data_residual, dcs, lcs, length_residual};
use crate::protocol::cursor::Cursor;
use crate::types::FrameKind;
use crate::{Error, Result};

/// PN532 information frame helper.
///
/// Normal:   [00 00 FF] [LEN] [LCS] [TFI] [payload] [DCS] [00]
/// Extended: [00 00 FF] [FF FF] [LENM LENL] [LCS] [TFI] [payload] [DCS] [00]
///
/// LEN counts the TFI byte, so it is always `payload.len() + 1`.
pub struct Frame;

/// A frame split into its parts. `payload` excludes the TFI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    /// Shape announced by the length marker.
    pub kind: FrameKind,
    /// TFI as received.
    pub tfi: u8,
    /// Bytes between TFI and DCS.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Build a host-to-chip command frame around `payload`.
    ///
    /// `payload` must not exceed [`EXTENDED_MAX_PAYLOAD_LEN`] bytes.
    pub fn encode(payload: &[u8]) -> Vec<u8> {
        Self::encode_with_tfi(TFI_HOST, payload)
    }

    /// Build a frame with an explicit TFI. Extended lengths are 16 bits wide,
    /// so payloads longer than [`EXTENDED_MAX_PAYLOAD_LEN`] bytes cannot be
    /// described.
    pub fn encode_with_tfi(tfi: u8, payload: &[u8]) -> Vec<u8> {
        debug_assert!(
            payload.len() <= EXTENDED_MAX_PAYLOAD_LEN,
            "payload of {} bytes does not fit a 16-bit LEN",
            payload.len()
        );
        let kind = FrameKind::for_payload_len(payload.len());
        let len = payload.len() + 1;

        let mut out = Vec::with_capacity(kind.min_frame_len() + payload.len());
        out.extend_from_slice(&START_CODE);
        match kind {
            FrameKind::Normal => {
                let field = [len as u8];
                out.extend_from_slice(&field);
                out.push(lcs(&field));
            }
            FrameKind::Extended => {
                let field = (len as u16).to_be_bytes();
                out.extend_from_slice(&EXTENDED_MARKER);
                out.extend_from_slice(&field);
                out.push(lcs(&field));
            }
        }
        out.push(tfi);
        out.extend_from_slice(payload);
        out.push(dcs(tfi, payload));
        out.push(POSTAMBLE);
        out
    }

    /// True when `bytes` is exactly the ACK frame.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == ACK_FRAME
    }

    /// Shape announced by the length marker of a frame segment.
    pub fn classify(segment: &[u8]) -> FrameKind {
        if segment.len() >= 5 && segment[3..5] == EXTENDED_MARKER {
            FrameKind::Extended
        } else {
            FrameKind::Normal
        }
    }

    /// Split a frame segment into its payload.
    ///
    /// Start code, LCS, TFI, DCS and payload-size disagreements are recorded
    /// as anomalies and the payload is still returned. The payload runs from
    /// the header to the last two bytes of the segment. A segment shorter than
    /// the minimal frame, or a non-zero postamble, is fatal.
    pub fn decode(segment: &[u8], expected_tfi: u8) -> Result<Checked<DecodedFrame>> {
        let kind = Self::classify(segment);
        if segment.len() < kind.min_frame_len() {
            return Err(Error::ShortFrame {
                kind,
                expected: kind.min_frame_len(),
                actual: segment.len(),
            });
        }

        let mut anomalies = Vec::new();
        let mut c = Cursor::new(segment);

        let start: [u8; 3] = c.read_array()?;
        if start != START_CODE {
            anomalies.push(Anomaly::BadStartCode { actual: start });
        }

        // a normal LEN is widened with a zero high byte, which leaves its sum alone
        let (declared, length_field) = match kind {
            FrameKind::Normal => {
                let len = c.read_u8()?;
                (len as usize, [0x00, len])
            }
            FrameKind::Extended => {
                c.take(EXTENDED_MARKER.len())?;
                let len = c.read_be_u16()?;
                (len as usize, len.to_be_bytes())
            }
        };
        let lcs = c.read_u8()?;
        let residual = length_residual(&length_field, lcs);
        if residual != 0 {
            anomalies.push(Anomaly::LengthChecksum { sum: residual });
        }

        let tfi = c.read_u8()?;
        if tfi != expected_tfi {
            anomalies.push(Anomaly::UnexpectedTfi {
                expected: expected_tfi,
                actual: tfi,
            });
        }

        let body_end = segment.len() - 2;
        let payload = c.take(body_end - kind.payload_offset())?;
        let dcs = c.read_u8()?;
        let postamble = c.read_u8()?;

        // LEN wraps at the field width (a 255-byte normal payload gives 0x00)
        let field_mask = match kind {
            FrameKind::Normal => 0xFF,
            FrameKind::Extended => 0xFFFF,
        };
        if (payload.len() + 1) & field_mask != declared {
            anomalies.push(Anomaly::PayloadLength {
                declared: declared.saturating_sub(1),
                actual: payload.len(),
            });
        }

        let residual = data_residual(tfi, payload, dcs);
        if residual != 0 {
            anomalies.push(Anomaly::DataChecksum { sum: residual });
        }

        if postamble != POSTAMBLE {
            return Err(Error::IntegrityFault(format!(
                "unexpected postamble {:#04x}",
                postamble
            )));
        }

        Ok(Checked::with_anomalies(
            DecodedFrame {
                kind,
                tfi,
                payload: payload.to_vec(),
            },
            anomalies,
        ))
    }
}
