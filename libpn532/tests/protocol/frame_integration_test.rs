use libpn532::constants::{TFI_CHIP, TFI_HOST};
use libpn532::protocol::Frame;
use libpn532::{Anomaly, FrameKind};
use proptest::prelude::*;

use crate::common::fixtures;

#[test]
fn sam_configuration_matches_wire_bytes() {
    assert_eq!(Frame::encode(&[0x14, 0x01, 0x00]), fixtures::sam_configuration_frame());
}

#[test]
fn full_normal_frame_wraps_length_byte() {
    let payload = vec![0x5A; 255];
    let frame = Frame::encode(&payload);
    assert_eq!(frame[3], 0x00);
    assert_eq!(frame[4], 0x00);
    assert_eq!(frame.len(), 8 + 255);

    let out = Frame::decode(&frame, TFI_HOST).unwrap();
    assert_eq!(out.value.kind, FrameKind::Normal);
    assert_eq!(out.value.payload, payload);
    assert!(out.is_clean());
}

#[test]
fn long_chip_frame_is_extended() {
    let payload = vec![0xAA; 300];
    let frame = Frame::encode_with_tfi(TFI_CHIP, &payload);
    assert_eq!(&frame[3..8], &[0xFF, 0xFF, 0x01, 0x2D, 0xD2]);
    assert_eq!(Frame::classify(&frame), FrameKind::Extended);

    let out = Frame::decode(&frame, TFI_CHIP).unwrap();
    assert_eq!(out.value.payload, payload);
    assert!(out.is_clean());
}

#[test]
fn host_frame_read_as_chip_frame_reports_tfi() {
    let frame = Frame::encode(&[0x4A, 0x01, 0x00]);
    let out = Frame::decode(&frame, TFI_CHIP).unwrap();
    assert_eq!(
        out.anomalies,
        vec![Anomaly::UnexpectedTfi {
            expected: TFI_CHIP,
            actual: TFI_HOST
        }]
    );
    assert_eq!(out.value.payload, vec![0x4A, 0x01, 0x00]);
}

proptest! {
    #[test]
    fn encode_then_decode_any_payload(payload in prop::collection::vec(any::<u8>(), 0..400)) {
        let frame = Frame::encode(&payload);
        let out = Frame::decode(&frame, TFI_HOST).unwrap();
        prop_assert!(out.is_clean());
        prop_assert_eq!(out.value.payload, payload);
    }
}
