// libpn532/src/protocol/responses/transfer.rs

use crate::protocol::cursor::Cursor;
use crate::{Error, Result};

/// Decode the body of an InDataExchange response (after the echo byte):
/// a status byte followed by the card's answer. Any non-zero status is an
/// error reported by the chip.
pub fn decode_in_data_exchange(body: &[u8]) -> Result<Vec<u8>> {
    let mut c = Cursor::new(body);
    let status = c
        .read_u8()
        .map_err(|_| Error::IntegrityFault("data exchange response has no status byte".into()))?;
    if status != 0x00 {
        return Err(Error::StatusError { status });
    }
    Ok(c.rest().to_vec())
}

/// Split an InCommunicateThru response body into status and data.
pub fn decode_in_communicate_thru(body: &[u8]) -> Result<(u8, Vec<u8>)> {
    let mut c = Cursor::new(body);
    let status = c.read_u8()?;
    Ok((status, c.rest().to_vec()))
}
