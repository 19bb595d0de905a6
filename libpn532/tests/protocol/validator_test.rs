use libpn532::constants::ACK_FRAME;
use libpn532::protocol::read_response;
use libpn532::transport::MockTransport;
use libpn532::{Anomaly, Error};

use crate::common::{chip_response, fixtures};

fn split(bytes: Vec<u8>) -> (Vec<u8>, Vec<u8>) {
    let mut ack = bytes;
    let frame = ack.split_off(ACK_FRAME.len());
    (ack, frame)
}

#[test]
fn one_read_or_two_reads_give_the_same_payload() {
    let payload = fixtures::type_a_poll_payload();

    let mut bundled = MockTransport::new();
    bundled.push_response(chip_response(&payload));
    let a = read_response(&mut bundled, 5000, 288).unwrap();

    let (ack, frame) = split(chip_response(&payload));
    let mut separate = MockTransport::new();
    separate.push_response(ack);
    separate.push_response(frame);
    let b = read_response(&mut separate, 5000, 288).unwrap();

    assert_eq!(a.value, payload);
    assert_eq!(a, b);
    assert_eq!(bundled.sent(), separate.sent());
}

#[test]
fn length_checksum_fault_is_reported() {
    let mut resp = chip_response(&[0x41, 0x00, 0x90, 0x00]);
    resp[6 + 4] ^= 0x01;
    let mut m = MockTransport::new();
    m.push_response(resp);
    let out = read_response(&mut m, 500, 288).unwrap();
    assert_eq!(out.value, vec![0x41, 0x00, 0x90, 0x00]);
    assert!(matches!(out.anomalies[..], [Anomaly::LengthChecksum { .. }]));
}

#[test]
fn ack_then_nothing() {
    let mut m = MockTransport::new();
    m.push_response(ACK_FRAME.to_vec());
    m.push_response(Vec::new());
    assert!(matches!(read_response(&mut m, 500, 288), Err(Error::NoData)));
    assert!(m.sent().is_empty());
}

#[test]
fn three_hundred_byte_extended_response() {
    let payload = vec![0xAA; 300];
    let mut m = MockTransport::new();
    m.push_response(chip_response(&payload));
    let out = read_response(&mut m, 500, 400).unwrap();
    assert_eq!(out.value.len(), 300);
    assert!(out.is_clean());
    assert_eq!(m.sent(), vec![ACK_FRAME.to_vec()]);
}
