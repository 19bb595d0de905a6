// fixtures.rs — provides commonly used test payloads/frames

use libpn532::protocol::Frame;

/// Decode hex text with optional spaces.
pub fn bytes(text: &str) -> Vec<u8> {
    hex::decode(text.replace(' ', "")).expect("fixture hex")
}

/// SAMConfiguration(normal, no timeout) as it goes on the wire.
pub fn sam_configuration_frame() -> Vec<u8> {
    bytes("00 00 ff 04 fc d4 14 01 00 17 00")
}

/// InListPassiveTarget answer for a 7-byte NFCID card with ATS.
pub fn type_a_poll_payload() -> Vec<u8> {
    bytes("4b 01 01 00 44 20 07 04 a2 4f 1a 2b 3c 80 05 78 80 70 02")
}

pub fn nfc_id() -> Vec<u8> {
    bytes("04 a2 4f 1a 2b 3c 80")
}

pub fn ats() -> Vec<u8> {
    bytes("78 80 70 02")
}

/// SELECT AID command used by the exchange scripts.
pub fn select_aid() -> Vec<u8> {
    bytes("00 a4 04 00 07 a0 00 00 02 47 10 01")
}

pub fn data_exchange_ok(answer: &[u8]) -> Vec<u8> {
    let mut payload = vec![0x41, 0x00];
    payload.extend_from_slice(answer);
    payload
}

pub fn host_frame(payload: &[u8]) -> Vec<u8> {
    Frame::encode(payload)
}
