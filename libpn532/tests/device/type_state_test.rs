use libpn532::device::{Controller, ControllerBuilder, ControllerConfig};
use libpn532::test_support::{boxed_mock_with_responses, chip_response};

#[test]
fn initialize_transitions_and_keeps_config() {
    let boxed = boxed_mock_with_responses(vec![chip_response(&[0x15]), chip_response(&[0x33])]);
    let config = ControllerConfig {
        poll_timeout_ms: 1500,
        ..Default::default()
    };
    let controller = Controller::with_config(boxed, config);
    assert_eq!(controller.config().poll_timeout_ms, 1500);

    let ready = controller.initialize().unwrap();
    assert_eq!(ready.config().poll_timeout_ms, 1500);

    let mut transport = ready.into_transport().unwrap();
    // both configuration answers were consumed
    assert!(transport.receive(10, 288).is_err());
}

#[test]
fn builder_initializes_against_silent_chip() {
    let boxed = boxed_mock_with_responses(vec![]);
    let ready = ControllerBuilder::new().with_transport(boxed).build();
    assert!(ready.is_ok());
}
