// libpn532/src/protocol/checksum.rs

use crate::constants::CRC_A_INIT;

fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Compute the Length Checksum (LCS) over the length field bytes.
/// LCS = 0x100 - sum(length bytes) (mod 256)
pub fn lcs(length_bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(length_bytes))
}

/// Compute the Data Checksum (DCS) over TFI and payload.
/// DCS = 0x100 - (tfi + sum(payload)) (mod 256)
pub fn dcs(tfi: u8, payload: &[u8]) -> u8 {
    0u8.wrapping_sub(tfi.wrapping_add(sum(payload)))
}

/// Residual of length bytes plus LCS; zero for a valid frame.
pub fn length_residual(length_bytes: &[u8], lcs: u8) -> u8 {
    sum(length_bytes).wrapping_add(lcs)
}

/// Residual of TFI, payload and DCS; zero for a valid frame.
pub fn data_residual(tfi: u8, payload: &[u8], dcs: u8) -> u8 {
    tfi.wrapping_add(sum(payload)).wrapping_add(dcs)
}

/// ISO/IEC 14443-3 Type A CRC (CRC_A), returned low byte first.
pub fn crc16a(data: &[u8]) -> [u8; 2] {
    let mut crc = CRC_A_INIT;
    for &byte in data {
        let mut b = byte ^ (crc & 0x00FF) as u8;
        b ^= b << 4;
        let b = b as u16;
        crc = (crc >> 8) ^ (b << 8) ^ (b << 3) ^ (b >> 4);
    }
    crc.to_le_bytes()
}

/// Return `data` with its CRC_A appended.
pub fn with_crc16a(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 2);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc16a(data));
    out
}
