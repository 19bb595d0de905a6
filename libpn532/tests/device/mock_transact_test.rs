use libpn532::card::ExpectedResponse;
use libpn532::device::ControllerBuilder;
use libpn532::test_support::seed_init_responses;
use libpn532::transport::MockTransport;

use crate::common::{chip_response, fixtures, initialized_mock_controller};

#[test]
fn poll_then_transact_script() {
    let (controller, mock) = initialized_mock_controller(vec![
        chip_response(&fixtures::type_a_poll_payload()),
        chip_response(&fixtures::data_exchange_ok(&[0x90, 0x00])),
        chip_response(&fixtures::data_exchange_ok(&[0x01, 0x02, 0x90, 0x00])),
    ])
    .unwrap();

    let card = controller.poll_type_a().unwrap().value.expect("card");
    mock.clear_sent();

    let ok = card
        .transact_hex(
            &["00 a4 04 00 07 a0 00 00 02 47 10 01", "00 b0 00 00 02"],
            &["90 00", "*"],
        )
        .unwrap();
    assert!(ok);

    let mut first = vec![0x40, 0x01];
    first.extend_from_slice(&fixtures::select_aid());
    assert_eq!(mock.sent()[0], fixtures::host_frame(&first));
}

#[test]
fn extended_answer_end_to_end() {
    let answer = vec![0xAA; 300];
    let mock = MockTransport::new();
    seed_init_responses(&mock);
    mock.push_response(chip_response(&fixtures::type_a_poll_payload()));
    mock.push_response(chip_response(&fixtures::data_exchange_ok(&answer)));

    // ACK plus a 302-byte extended frame needs more than the default read
    let controller = ControllerBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .read_len(512)
        .build()
        .unwrap();
    let card = controller.poll_type_a().unwrap().value.expect("card");
    let report = card.transact_report(
        &[fixtures::select_aid()],
        &[ExpectedResponse::Exact(answer.clone())],
    );
    assert!(report.passed());
    assert_eq!(report.outcomes[0].response.as_ref().unwrap(), &answer);
    assert_eq!(mock.pending_responses(), 0);
}

#[test]
fn one_mismatch_in_five() {
    let mut answers = vec![chip_response(&fixtures::type_a_poll_payload())];
    for i in 0..5u8 {
        answers.push(chip_response(&fixtures::data_exchange_ok(&[i, 0x90, 0x00])));
    }
    let (controller, mock) = initialized_mock_controller(answers).unwrap();
    let card = controller.poll_type_a().unwrap().value.expect("card");
    mock.clear_sent();

    let commands: Vec<Vec<u8>> = (0..5u8).map(|i| vec![0x00, 0xB2, i, 0x0C]).collect();
    let expected: Vec<ExpectedResponse> = (0..5u8)
        .map(|i| {
            if i == 3 {
                ExpectedResponse::Exact(vec![0xFF, 0x90, 0x00])
            } else {
                ExpectedResponse::Exact(vec![i, 0x90, 0x00])
            }
        })
        .collect();

    assert!(!card.transact(&commands, &expected));
    let exchanges = mock.sent().into_iter().filter(|f| f.len() > 6).count();
    assert_eq!(exchanges, 5);
    assert_eq!(mock.pending_responses(), 0);
}
