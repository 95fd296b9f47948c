use crate::segment::Slot;

/// Splits `value` into four right-aligned positions (index 0 is leftmost).
///
/// Leading positions the value does not reach get the padding slot. Only the
/// four low decimal digits are kept, so `12345` lays out as `2345`.
pub fn format_number(value: u64, zero_fill: bool) -> [Slot; 4] {
    let pad = if zero_fill { Slot::ZeroFill } else { Slot::Blank };
    let width = match value {
        0..=9 => 1,
        10..=99 => 2,
        100..=999 => 3,
        _ => 4,
    };

    let mut slots = [pad; 4];
    let mut rest = value;
    for slot in slots.iter_mut().rev().take(width) {
        *slot = Slot::Digit((rest % 10) as u8);
        rest /= 10;
    }
    slots
}
