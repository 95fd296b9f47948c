pub const NUM_DIGITS: u8 = 4;
pub const MAX_BRIGHTNESS: u8 = 7; // 3 bits
pub const DEFAULT_BRIGHTNESS: u8 = 7;
pub const COLON_MASK: u8 = 0x80;
pub const COLON_ADDRESS: u8 = 1;

// 0-9 followed by A-F, segment a is bit 0
pub const NUMBERS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71,
];

// legacy buffer sentinels, kept for callers that speak raw bytes
pub const BLANK_RAW: u8 = 0x7F;
pub const ZERO_FILL_RAW: u8 = 0x3F;

pub mod command {
    pub const DATA_FIXED_ADDRESS: u8 = 0x44; // write to display register, fixed address
    pub const ADDRESS_BASE: u8 = 0xC0; // bits 2:0 select the digit
    pub const DISPLAY_ON: u8 = 0x88; // bits 2:0 carry the brightness
}
