//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.

use crate::constants::{ACK_FRAME, TFI_CHIP};
use crate::device::{BoxedTransport, Controller, Initialized};
use crate::protocol::Frame;
use crate::transport::mock::MockTransport;
use crate::Result;

/// What the chip sends back for one command: ACK, then a D5 frame.
#[doc(hidden)]
pub fn chip_response(payload: &[u8]) -> Vec<u8> {
    let mut out = ACK_FRAME.to_vec();
    out.extend_from_slice(&Frame::encode_with_tfi(TFI_CHIP, payload));
    out
}

/// Queue answers for the SAM and RF configuration sent by `initialize`.
#[doc(hidden)]
pub fn seed_init_responses(mock: &MockTransport) {
    mock.push_response(chip_response(&[0x15]));
    mock.push_response(chip_response(&[0x33]));
}

/// Build a MockTransport pre-seeded with the given raw reads and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> BoxedTransport {
    let mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Create an initialized Controller backed by a MockTransport. The
/// configuration answers are queued first, then `responses`. The returned
/// mock shares state with the one the controller owns.
#[doc(hidden)]
pub fn initialized_mock_controller(
    responses: Vec<Vec<u8>>,
) -> Result<(Controller<Initialized>, MockTransport)> {
    let mock = MockTransport::new();
    seed_init_responses(&mock);
    for resp in responses {
        mock.push_response(resp);
    }
    let controller = Controller::new_with_transport(Box::new(mock.clone())).initialize()?;
    Ok((controller, mock))
}
