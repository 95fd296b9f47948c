#![no_std]

#[cfg(test)]
extern crate std;

mod bus;
mod connector;
mod constants;
mod format;
mod segment;

pub use connector::{Connector, ConnectorPins};
pub use constants::*;
pub use format::format_number;
pub use segment::{encode, encode_at, Slot};

use bus::Bus;
use embedded_hal::digital::OutputPin;
use num_traits::ToPrimitive;

/// Plain operations drop every error; the `try_` variants return it.
pub struct TM1637<CLK, DIO> {
    bus: Bus<CLK, DIO>,
    brightness: u8,
    colon: bool,
    digits: [Slot; NUM_DIGITS as usize],
}

impl<CLK, DIO, E> TM1637<CLK, DIO>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
{
    pub fn new(clk: CLK, dio: DIO) -> Self {
        let mut display = Self {
            bus: Bus::new(clk, dio),
            brightness: DEFAULT_BRIGHTNESS,
            colon: false,
            digits: [Slot::Blank; NUM_DIGITS as usize],
        };
        display.clear();
        display
    }

    pub fn from_connector<F, G>(connector: Connector, clk: F, dio: G) -> Self
    where
        F: FnOnce(u8) -> CLK,
        G: FnOnce(u8) -> DIO,
    {
        let ConnectorPins { clk: clk_pin, dio: dio_pin } = connector.pins();
        Self::new(clk(clk_pin), dio(dio_pin))
    }

    pub fn destroy(self) -> (CLK, DIO) {
        self.bus.release()
    }

    pub fn digits(&self) -> [Slot; NUM_DIGITS as usize] {
        self.digits
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn colon(&self) -> bool {
        self.colon
    }

    pub fn show<T: ToPrimitive>(&mut self, value: T, zero_fill: bool) {
        let _ = self.try_show(value, zero_fill);
    }

    pub fn set(&mut self, brightness: u8) {
        let _ = self.try_set(brightness);
    }

    pub fn bit(&mut self, slot: Slot, address: u8) {
        let _ = self.try_bit(slot, address);
    }

    pub fn point(&mut self, enabled: bool) {
        let _ = self.try_point(enabled);
    }

    pub fn clear(&mut self) {
        let _ = self.try_clear();
    }

    pub fn try_show<T: ToPrimitive>(
        &mut self,
        value: T,
        zero_fill: bool,
    ) -> Result<(), TM1637Error<E>> {
        let value = value.to_u64().ok_or(TM1637Error::InvalidValue)?;
        let slots = format_number(value, zero_fill);

        for address in (0..NUM_DIGITS).rev() {
            let slot = slots[address as usize];
            self.try_bit(slot, address)?;
            self.digits[address as usize] = slot;
        }
        Ok(())
    }

    // levels above MAX_BRIGHTNESS are sent unchecked
    pub fn try_set(&mut self, brightness: u8) -> Result<(), TM1637Error<E>> {
        self.brightness = brightness;
        for address in 0..NUM_DIGITS {
            self.try_bit(self.digits[address as usize], address)?;
        }
        Ok(())
    }

    /// Sentinels pass at any address; digits need `0..=9` and an address below 4.
    pub fn try_bit(&mut self, slot: Slot, address: u8) -> Result<(), TM1637Error<E>> {
        if !slot.is_sentinel() {
            if slot.raw() > 9 {
                return Err(TM1637Error::InvalidValue);
            }
            if address >= NUM_DIGITS {
                return Err(TM1637Error::InvalidAddress(address));
            }
        }

        let segments = encode_at(slot, address, self.colon);
        self.bus.write_digit(address, segments, self.brightness)?;

        // an out of range sentinel is sent but has no slot to land in
        if let Some(stored) = self.digits.get_mut(address as usize) {
            *stored = slot;
        }
        Ok(())
    }

    pub fn try_point(&mut self, enabled: bool) -> Result<(), TM1637Error<E>> {
        self.colon = enabled;
        self.try_bit(self.digits[COLON_ADDRESS as usize], COLON_ADDRESS)
    }

    pub fn try_clear(&mut self) -> Result<(), TM1637Error<E>> {
        for address in 0..NUM_DIGITS {
            self.try_bit(Slot::Blank, address)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TM1637Error<E> {
    PinError(E),
    InvalidValue,
    InvalidAddress(u8),
}

impl<E> From<E> for TM1637Error<E> {
    fn from(error: E) -> Self {
        TM1637Error::PinError(error)
    }
}
