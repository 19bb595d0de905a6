// libpn532/src/types.rs

use derive_more::Display;

/// Frame shape, selected by payload length on the way out and by the length
/// marker on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FrameKind {
    /// One length byte, payloads up to 255 bytes.
    #[display(fmt = "normal")]
    Normal,
    /// `FF FF` marker and a two-byte length.
    #[display(fmt = "extended")]
    Extended,
}

impl FrameKind {
    /// Shape used for an outbound payload of `len` bytes.
    pub fn for_payload_len(len: usize) -> Self {
        if len > crate::constants::NORMAL_MAX_PAYLOAD_LEN {
            Self::Extended
        } else {
            Self::Normal
        }
    }

    /// Smallest complete frame of this shape (empty payload).
    pub fn min_frame_len(self) -> usize {
        match self {
            Self::Normal => crate::constants::NORMAL_MIN_FRAME_LEN,
            Self::Extended => crate::constants::EXTENDED_MIN_FRAME_LEN,
        }
    }

    /// Offset of the TFI byte; the payload starts right after it.
    pub fn tfi_offset(self) -> usize {
        match self {
            Self::Normal => 5,
            Self::Extended => 8,
        }
    }

    /// Offset of the first payload byte.
    pub fn payload_offset(self) -> usize {
        self.tfi_offset() + 1
    }
}

/// Card technology for InListPassiveTarget. Only 106 kbps variants are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CardType {
    /// ISO/IEC 14443 Type A.
    #[display(fmt = "type A")]
    TypeA,
    /// ISO/IEC 14443 Type B.
    #[display(fmt = "type B")]
    TypeB,
}

impl CardType {
    /// InListPassiveTarget arguments: MaxTg, BrTy and (type B) AFI.
    pub fn in_list_args(self) -> &'static [u8] {
        match self {
            Self::TypeA => &[0x01, 0x00],
            Self::TypeB => &[0x01, 0x03, 0x00],
        }
    }
}

/// Logical target number assigned by the chip during InListPassiveTarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "Tg{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetId(u8);

impl TargetId {
    /// Wrap a raw Tg byte.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw Tg byte, as prefixed to InDataExchange data.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}
