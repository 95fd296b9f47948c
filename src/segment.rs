use crate::constants::{BLANK_RAW, COLON_ADDRESS, COLON_MASK, NUMBERS, ZERO_FILL_RAW};

/// Content of one digit position.
///
/// `Blank` turns every segment off, `ZeroFill` renders as `0` and marks a
/// padding position produced by [`crate::TM1637::show`] with zero fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    Digit(u8),
    #[default]
    Blank,
    ZeroFill,
}

impl Slot {
    /// Maps a legacy buffer byte: `0x7F` is blank, `0x3F` is zero fill,
    /// anything else is taken as a digit value.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            BLANK_RAW => Slot::Blank,
            ZERO_FILL_RAW => Slot::ZeroFill,
            value => Slot::Digit(value),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            Slot::Digit(value) => value,
            Slot::Blank => BLANK_RAW,
            Slot::ZeroFill => ZERO_FILL_RAW,
        }
    }

    pub fn is_sentinel(self) -> bool {
        !matches!(self, Slot::Digit(_))
    }
}

/// Segment byte for a slot. Digits past the table render blank.
pub fn encode(slot: Slot) -> u8 {
    match slot {
        Slot::Blank => 0x00,
        // the sentinel byte is the segment pattern of `0`
        Slot::ZeroFill => ZERO_FILL_RAW,
        Slot::Digit(value) => NUMBERS.get(value as usize).copied().unwrap_or(0x00),
    }
}

/// Segment byte as sent to `address`, with the colon merged into position 1.
pub fn encode_at(slot: Slot, address: u8, colon: bool) -> u8 {
    let segments = encode(slot);
    if address == COLON_ADDRESS && colon {
        segments | COLON_MASK
    } else {
        segments
    }
}
