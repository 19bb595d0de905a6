// libpn532/src/protocol/responses/target.rs

use log::debug;

use crate::protocol::cursor::Cursor;
use crate::types::TargetId;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Smallest record that can describe a target: NbTg, Tg, SENS_RES(2),
/// SEL_RES, NFCIDLength.
const MIN_RECORD_LEN: usize = 6;

/// Type A target as reported by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveTarget {
    /// Logical number the chip assigned (Tg).
    pub target_id: TargetId,
    /// SENS_RES (ATQA).
    pub sense_res: [u8; 2],
    /// SEL_RES (SAK).
    pub sel_res: u8,
    /// NFCID1 (UID).
    pub nfc_id: Vec<u8>,
    /// ATS without its leading length byte.
    pub ats: Vec<u8>,
}

fn corrupt(field: &str) -> impl FnOnce(Error) -> Error + '_ {
    move |e| match e {
        Error::InvalidLength { expected, actual } => Error::CorruptRecord(format!(
            "{} needs {} bytes, {} remaining",
            field, expected, actual
        )),
        other => other,
    }
}

impl PassiveTarget {
    /// Decode the InListPassiveTarget data that follows the response code:
    /// NbTg, Tg, SENS_RES(2), SEL_RES, NFCIDLength, NFCID, ATSLength, ATS.
    ///
    /// `Ok(None)` means no target answered. Declared lengths that run past
    /// the buffer, and bytes left over after the ATS, are `CorruptRecord`.
    pub fn decode(data: &[u8]) -> Result<Option<Self>> {
        if data.len() < MIN_RECORD_LEN || data[0] == 0 {
            debug!("no target in {}", bytes_to_hex(data));
            return Ok(None);
        }

        let mut c = Cursor::new(data);
        let _nb_tg = c.read_u8()?;
        let target_id = TargetId::new(c.read_u8()?);
        let sense_res: [u8; 2] = c.read_array()?;
        let sel_res = c.read_u8()?;
        let nfc_id = c.take_len_prefixed().map_err(corrupt("NFCID"))?.to_vec();

        let ats_len = c.read_u8().map_err(corrupt("ATS length"))? as usize;
        if ats_len == 0 {
            return Err(Error::CorruptRecord("ATS length byte is zero".into()));
        }
        // the length byte counts itself
        let ats = c.take(ats_len - 1).map_err(corrupt("ATS"))?.to_vec();

        // the ATS must close the record
        if !c.is_empty() {
            return Err(Error::CorruptRecord(format!(
                "{} bytes after ATS",
                c.remaining()
            )));
        }

        debug!(
            "found target {} SEL_RES {:02x} NFCID {}",
            target_id,
            sel_res,
            bytes_to_hex(&nfc_id)
        );

        Ok(Some(Self {
            target_id,
            sense_res,
            sel_res,
            nfc_id,
            ats,
        }))
    }
}
