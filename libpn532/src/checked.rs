// libpn532/src/checked.rs

//! Two-tier results: a value that made it through validation together with
//! the non-fatal anomalies seen on the way. Fatal conditions are `Err`.

use derive_more::Display;

/// Integrity findings that are reported but do not stop extraction.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Anomaly {
    /// Preamble and start code other than `00 00 FF`.
    #[display(fmt = "unexpected start code {:02x?}", actual)]
    BadStartCode {
        /// Bytes found instead.
        actual: [u8; 3],
    },

    /// LEN + LCS did not sum to zero.
    #[display(fmt = "length checksum failed (sum {:#04x})", sum)]
    LengthChecksum {
        /// Residual sum.
        sum: u8,
    },

    /// TFI other than the expected direction.
    #[display(fmt = "unexpected TFI {:#04x}, expected {:#04x}", actual, expected)]
    UnexpectedTfi {
        /// TFI for this direction.
        expected: u8,
        /// TFI received.
        actual: u8,
    },

    /// TFI + payload + DCS did not sum to zero.
    #[display(fmt = "data checksum failed (sum {:#04x})", sum)]
    DataChecksum {
        /// Residual sum.
        sum: u8,
    },

    /// Payload size disagrees with LEN.
    #[display(fmt = "payload is {} bytes, length field declares {}", actual, declared)]
    PayloadLength {
        /// Payload size implied by LEN.
        declared: usize,
        /// Payload size found.
        actual: usize,
    },
}

/// A successfully extracted value plus its anomalies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    /// The extracted value.
    pub value: T,
    /// Non-fatal findings, in the order seen.
    pub anomalies: Vec<Anomaly>,
}

impl<T> Checked<T> {
    /// A value without anomalies.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            anomalies: Vec::new(),
        }
    }

    /// A value with the given anomalies.
    pub fn with_anomalies(value: T, anomalies: Vec<Anomaly>) -> Self {
        Self { value, anomalies }
    }

    /// True when nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }

    /// Drop the anomalies.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transform the value, keeping the anomalies.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            anomalies: self.anomalies,
        }
    }

    /// Fallible transform; anomalies from both stages are concatenated.
    pub fn and_then<U>(
        self,
        f: impl FnOnce(T) -> crate::Result<Checked<U>>,
    ) -> crate::Result<Checked<U>> {
        let mut next = f(self.value)?;
        let mut anomalies = self.anomalies;
        anomalies.append(&mut next.anomalies);
        Ok(Checked {
            value: next.value,
            anomalies,
        })
    }
}
