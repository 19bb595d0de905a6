// libpn532/src/protocol/validator.rs

//! Response side of one request/response cycle: ACK, response frame, host ACK.

use log::{debug, warn};

use crate::checked::Checked;
use crate::constants::{ACK_FRAME, TFI_CHIP};
use crate::protocol::frame::Frame;
use crate::transport::Transport;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Read from the transport, treating a timeout as an empty read.
fn read_or_empty<T: Transport + ?Sized>(
    transport: &mut T,
    timeout_ms: u64,
    max_len: usize,
) -> Result<Vec<u8>> {
    match transport.receive(timeout_ms, max_len) {
        Ok(bytes) => Ok(bytes),
        Err(Error::Timeout) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Collect the chip's answer to a command that was just written.
///
/// The first read must start with the ACK frame. The response frame either
/// follows it in the same read or arrives in a second read with the same
/// timeout. On success the ACK is sent back so the chip releases its buffer,
/// and the payload (everything after the TFI) is returned together with any
/// non-fatal anomalies.
pub fn read_response<T: Transport + ?Sized>(
    transport: &mut T,
    timeout_ms: u64,
    max_len: usize,
) -> Result<Checked<Vec<u8>>> {
    let mut first = read_or_empty(transport, timeout_ms, max_len)?;
    if first.len() < ACK_FRAME.len() {
        debug!("no ack: read {} bytes", first.len());
        return Err(Error::NoAck {
            received: first.len(),
        });
    }
    if !Frame::is_ack(&first[..ACK_FRAME.len()]) {
        warn!("did not get ack frame, got {}", bytes_to_hex(&first[..ACK_FRAME.len()]));
        return Err(Error::NoAck {
            received: first.len(),
        });
    }

    let segment = if first.len() > ACK_FRAME.len() {
        first.split_off(ACK_FRAME.len())
    } else {
        read_or_empty(transport, timeout_ms, max_len)?
    };

    if segment.is_empty() {
        debug!("ack without response data");
        return Err(Error::NoData);
    }
    // an ACK is shorter than any frame, so check for it before sizing
    if Frame::is_ack(&segment) {
        debug!("got another ack frame");
        return Err(Error::DuplicateAck);
    }

    let decoded = Frame::decode(&segment, TFI_CHIP)?;
    for anomaly in &decoded.anomalies {
        warn!("{} in frame {}", anomaly, bytes_to_hex(&segment));
    }

    if let Err(e) = transport.send(&ACK_FRAME) {
        warn!("failed to acknowledge response: {}", e);
    }
    debug!(
        "received {} frame {}",
        decoded.value.kind,
        bytes_to_hex(&decoded.value.payload)
    );

    Ok(decoded.map(|frame| frame.payload))
}
