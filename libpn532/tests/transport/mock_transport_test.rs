use libpn532::transport::{MockTransport, Transport};

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01]);
    m.send(&[0xAA]).unwrap();
    assert_eq!(m.sent().len(), 1);
    let r = m.receive(1000, 288).unwrap();
    assert_eq!(r, vec![0x01]);
    assert_eq!(m.reads(), vec![(1000, 288)]);
}

#[test]
fn boxed_mock_keeps_queue_order() {
    let mut boxed = libpn532::test_support::boxed_mock_with_responses(vec![vec![1], vec![2]]);
    assert_eq!(boxed.receive(10, 288).unwrap(), vec![1]);
    assert_eq!(boxed.receive(10, 288).unwrap(), vec![2]);
}
