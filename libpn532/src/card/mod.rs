// libpn532/src/card/mod.rs

use log::{debug, error};

use crate::checked::Checked;
use crate::device::{Controller, Initialized};
use crate::protocol::PassiveTarget;
use crate::types::TargetId;
use crate::utils::bytes_to_hex;
use crate::Result;

/// APDU scripts and their results.
pub mod apdu;
pub use apdu::{ApduOutcome, ExpectedResponse, TransactionReport, WILDCARD};

/// A Type A target found by `Controller::poll_type_a`.
///
/// The target borrows the controller that found it. It is valid for the
/// current field activation; after `mute` or another poll the chip may no
/// longer know the target id.
pub struct CardTarget<'a> {
    controller: &'a Controller<Initialized>,
    info: PassiveTarget,
}

impl<'a> CardTarget<'a> {
    /// Pair a polled record with the controller that found it.
    pub fn new(controller: &'a Controller<Initialized>, info: PassiveTarget) -> Self {
        Self { controller, info }
    }

    /// The InListPassiveTarget record.
    pub fn info(&self) -> &PassiveTarget {
        &self.info
    }

    /// Tg prefixed to every exchange.
    pub fn target_id(&self) -> TargetId {
        self.info.target_id
    }

    /// Send one APDU to this target.
    pub fn exchange(&self, apdu: &[u8]) -> Result<Checked<Vec<u8>>> {
        let mut payload = Vec::with_capacity(apdu.len() + 1);
        payload.push(self.target_id().as_u8());
        payload.extend_from_slice(apdu);
        self.controller.exchange_data(&payload)
    }

    /// Run every command and compare each answer with its expectation.
    ///
    /// Mismatches do not stop the script. Lists of different length are
    /// rejected before anything is sent.
    pub fn transact_report<C: AsRef<[u8]>>(
        &self,
        commands: &[C],
        expected: &[ExpectedResponse],
    ) -> TransactionReport {
        if commands.len() != expected.len() {
            error!(
                "{} commands but {} expected responses",
                commands.len(),
                expected.len()
            );
            return TransactionReport::rejected(commands.len(), expected.len());
        }

        debug!(
            "transacting with {} SENS_RES {} SEL_RES {:02x} NFCID {} ATS {}",
            self.info.target_id,
            bytes_to_hex(&self.info.sense_res),
            self.info.sel_res,
            bytes_to_hex(&self.info.nfc_id),
            bytes_to_hex(&self.info.ats)
        );

        let outcomes = commands
            .iter()
            .zip(expected)
            .map(|(command, expected)| {
                let command = command.as_ref().to_vec();
                let response = self.exchange(&command).map(Checked::into_value);
                let outcome = ApduOutcome {
                    command,
                    expected: expected.clone(),
                    response,
                };
                if !outcome.passed() {
                    match &outcome.response {
                        Ok(actual) => error!(
                            "unexpected APDU: received {}, expected {}",
                            bytes_to_hex(actual),
                            outcome.expected
                        ),
                        Err(e) => error!(
                            "APDU {} failed: {}, expected {}",
                            bytes_to_hex(&outcome.command),
                            e,
                            outcome.expected
                        ),
                    }
                }
                outcome
            })
            .collect();

        TransactionReport {
            outcomes,
            rejected: None,
        }
    }

    /// True when every answer met its expectation.
    pub fn transact<C: AsRef<[u8]>>(&self, commands: &[C], expected: &[ExpectedResponse]) -> bool {
        self.transact_report(commands, expected).passed()
    }

    /// `transact` over hex text, with `*` accepting any answer.
    pub fn transact_hex(&self, commands: &[&str], expected: &[&str]) -> Result<bool> {
        let commands = commands
            .iter()
            .map(|c| crate::utils::parse_hex(c).map_err(crate::Error::InvalidHex))
            .collect::<Result<Vec<_>>>()?;
        let expected = expected
            .iter()
            .map(|e| e.parse::<ExpectedResponse>())
            .collect::<Result<Vec<ExpectedResponse>>>()?;
        Ok(self.transact(&commands, &expected))
    }
}
