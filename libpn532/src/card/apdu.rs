// libpn532/src/card/apdu.rs

use std::fmt;
use std::str::FromStr;

use crate::utils::{bytes_to_hex, parse_hex};
use crate::{Error, Result};

/// Text that stands for "any response" in an APDU script.
pub const WILDCARD: &str = "*";

/// What a scripted command is expected to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedResponse {
    /// Anything, including a failed exchange.
    Any,
    /// Exactly these bytes.
    Exact(Vec<u8>),
}

impl ExpectedResponse {
    /// True when `response` satisfies this expectation.
    pub fn accepts(&self, response: &Result<Vec<u8>>) -> bool {
        match (self, response) {
            (Self::Any, _) => true,
            (Self::Exact(expected), Ok(actual)) => expected == actual,
            (Self::Exact(_), Err(_)) => false,
        }
    }
}

impl FromStr for ExpectedResponse {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == WILDCARD {
            return Ok(Self::Any);
        }
        parse_hex(s).map(Self::Exact).map_err(Error::InvalidHex)
    }
}

impl From<Vec<u8>> for ExpectedResponse {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Exact(bytes)
    }
}

impl fmt::Display for ExpectedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(WILDCARD),
            Self::Exact(bytes) => f.write_str(&bytes_to_hex(bytes)),
        }
    }
}

/// One scripted command and what came back.
#[derive(Debug)]
pub struct ApduOutcome {
    /// APDU as sent, without the target number.
    pub command: Vec<u8>,
    /// Expectation from the script.
    pub expected: ExpectedResponse,
    /// Card answer, or the error that prevented one.
    pub response: Result<Vec<u8>>,
}

impl ApduOutcome {
    /// True when the response met the expectation.
    pub fn passed(&self) -> bool {
        self.expected.accepts(&self.response)
    }
}

/// Result of running an APDU script against a card.
#[derive(Debug, Default)]
pub struct TransactionReport {
    /// One entry per command, in script order.
    pub outcomes: Vec<ApduOutcome>,
    /// `(commands, expectations)` when the script was rejected unrun.
    pub rejected: Option<(usize, usize)>,
}

impl TransactionReport {
    pub(crate) fn rejected(commands: usize, expectations: usize) -> Self {
        Self {
            outcomes: Vec::new(),
            rejected: Some((commands, expectations)),
        }
    }

    /// True when the script ran and every outcome passed.
    pub fn passed(&self) -> bool {
        self.rejected.is_none() && self.outcomes.iter().all(ApduOutcome::passed)
    }

    /// Failed outcomes with their script index.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &ApduOutcome)> {
        self.outcomes.iter().enumerate().filter(|(_, o)| !o.passed())
    }
}
