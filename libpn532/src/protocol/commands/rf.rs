// libpn532/src/protocol/commands/rf.rs

use crate::constants::CMD_RF_CONFIGURATION;

/// RFConfiguration items used by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RfItem {
    /// Item 0x01: RF field.
    Field {
        /// Automatic RF collision avoidance.
        auto_rfca: bool,
        /// Antenna powered.
        on: bool,
    },
    /// Item 0x05: retry counts (0xFF = retry forever).
    MaxRetries {
        /// MxRtyATR.
        atr: u8,
        /// MxRtyPSL.
        psl: u8,
        /// MxRtyPassiveActivation.
        passive_activation: u8,
    },
}

impl RfItem {
    /// Field configuration that switches the antenna off.
    pub const FIELD_OFF: Self = Self::Field {
        auto_rfca: true,
        on: false,
    };

    /// Retry counts applied during initialization.
    pub const DEFAULT_RETRIES: Self = Self::MaxRetries {
        atr: 0x01,
        psl: 0x00,
        passive_activation: 0x01,
    };
}

/// Encode RFConfiguration (0x32) for a single item.
pub fn encode_rf_configuration(item: RfItem) -> Vec<u8> {
    match item {
        RfItem::Field { auto_rfca, on } => {
            let mut value = 0u8;
            if auto_rfca {
                value |= 0x02;
            }
            if on {
                value |= 0x01;
            }
            vec![CMD_RF_CONFIGURATION, 0x01, value]
        }
        RfItem::MaxRetries {
            atr,
            psl,
            passive_activation,
        } => vec![CMD_RF_CONFIGURATION, 0x05, atr, psl, passive_activation],
    }
}
