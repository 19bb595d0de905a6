use libpn532::Error;
use libpn532::constants::ACK_FRAME;

use crate::common::{chip_response, fixtures, initialized_mock_controller};

#[test]
fn poll_finds_type_a_card() {
    let (controller, mock) =
        initialized_mock_controller(vec![chip_response(&fixtures::type_a_poll_payload())])
            .unwrap();
    mock.clear_sent();

    let polled = controller.poll_type_a().unwrap();
    assert!(polled.is_clean());
    let card = polled.value.expect("card in field");
    assert_eq!(card.info().nfc_id, fixtures::nfc_id());
    assert_eq!(card.info().ats, fixtures::ats());

    assert_eq!(
        mock.sent(),
        vec![fixtures::host_frame(&[0x4A, 0x01, 0x00]), ACK_FRAME.to_vec()]
    );
    assert_eq!(mock.reads().last().map(|r| r.0), Some(5000));
}

#[test]
fn poll_in_empty_field() {
    // the chip ACKs but the poll times out before any answer
    let (controller, _mock) =
        initialized_mock_controller(vec![ACK_FRAME.to_vec()]).unwrap();
    assert!(matches!(controller.poll_type_a(), Err(Error::NoData)));

    let (controller, _mock) =
        initialized_mock_controller(vec![chip_response(&[0x4B, 0x00])]).unwrap();
    assert!(controller.poll_type_a().unwrap().value.is_none());
}

#[test]
fn corrupt_record_is_an_error() {
    let mut payload = fixtures::type_a_poll_payload();
    payload.truncate(10);
    let (controller, _mock) = initialized_mock_controller(vec![chip_response(&payload)]).unwrap();
    assert!(matches!(
        controller.poll_type_a(),
        Err(Error::CorruptRecord(_))
    ));

    // bytes after the ATS
    let mut payload = fixtures::type_a_poll_payload();
    payload.extend_from_slice(&[0xEE, 0xEE]);
    let (controller, _mock) = initialized_mock_controller(vec![chip_response(&payload)]).unwrap();
    assert!(matches!(
        controller.poll_type_a(),
        Err(Error::CorruptRecord(_))
    ));
}

#[test]
fn poll_b_then_mute() {
    let (controller, mock) = initialized_mock_controller(vec![
        chip_response(&[0x4B, 0x00]),
        chip_response(&[0x33]),
    ])
    .unwrap();
    mock.clear_sent();
    let reads_before = mock.reads().len();

    controller.poll_type_b().unwrap();
    controller.mute().unwrap();
    let sent = mock.sent();
    assert_eq!(sent[0], fixtures::host_frame(&[0x4A, 0x01, 0x03, 0x00]));
    assert_eq!(sent[2], fixtures::host_frame(&[0x32, 0x01, 0x02]));
    // the type B probe waits no longer than an ordinary exchange
    assert_eq!(mock.reads()[reads_before].0, 500);
}
