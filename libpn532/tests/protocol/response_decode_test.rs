use libpn532::constants::{CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET, TFI_CHIP};
use libpn532::protocol::{Frame, PassiveTarget, Response, decode_response_frame};
use libpn532::{Error, TargetId};

use crate::common::fixtures;

#[test]
fn decode_type_a_target() {
    let resp = Response::decode(CMD_IN_LIST_PASSIVE_TARGET, &fixtures::type_a_poll_payload())
        .unwrap();
    assert!(resp.is_clean());
    match resp.value {
        Response::InListPassiveTarget(Some(t)) => {
            assert_eq!(t.target_id, TargetId::new(1));
            assert_eq!(t.sense_res, [0x00, 0x44]);
            assert_eq!(t.sel_res, 0x20);
            assert_eq!(t.nfc_id, fixtures::nfc_id());
            assert_eq!(t.ats, fixtures::ats());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn declared_lengths_past_the_buffer_are_corrupt() {
    // NFCID claims 16 bytes, 7 present
    let mut body = fixtures::type_a_poll_payload()[1..].to_vec();
    body[5] = 0x10;
    assert!(matches!(
        PassiveTarget::decode(&body),
        Err(Error::CorruptRecord(_))
    ));

    // ATS claims 9 bytes, 4 present
    let mut body = fixtures::type_a_poll_payload()[1..].to_vec();
    let ats_len_idx = 6 + 7;
    body[ats_len_idx] = 0x0A;
    assert!(matches!(
        PassiveTarget::decode(&body),
        Err(Error::CorruptRecord(_))
    ));
}

#[test]
fn data_exchange_frame() {
    let frame = Frame::encode_with_tfi(TFI_CHIP, &fixtures::data_exchange_ok(&[0x90, 0x00]));
    let resp = decode_response_frame(CMD_IN_DATA_EXCHANGE, &frame).unwrap();
    assert_eq!(resp.value, Response::InDataExchange(vec![0x90, 0x00]));

    let frame = Frame::encode_with_tfi(TFI_CHIP, &[0x41, 0x27]);
    assert!(matches!(
        decode_response_frame(CMD_IN_DATA_EXCHANGE, &frame),
        Err(Error::StatusError { status: 0x27 })
    ));
}
