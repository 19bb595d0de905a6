use libpn532::Error;
use libpn532::transport::{MockTransport, Transport};

#[test]
fn send_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_send_failures(1);

    assert!(matches!(m.send(&[0x00]), Err(Error::Transport(_))));
    m.send(&[0x00]).unwrap();
    assert_eq!(m.sent(), vec![vec![0x00]]);
}

#[test]
fn empty_queue_times_out() {
    let mut m = MockTransport::new();
    let err = m.receive(50, 288).unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, Error::Timeout));
}
