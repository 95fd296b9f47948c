use embedded_hal::digital::{OutputPin, PinState};

use crate::constants::command;

/// Bit-banged two-wire link to the TM1637.
///
/// There are no delays between edges; the latency of the pin writes is what
/// satisfies the chip's setup and hold times. The acknowledge slot is clocked
/// but never read.
pub(crate) struct Bus<CLK, DIO> {
    clk: CLK,
    dio: DIO,
}

impl<CLK, DIO, E> Bus<CLK, DIO>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
{
    pub(crate) fn new(clk: CLK, dio: DIO) -> Self {
        Self { clk, dio }
    }

    pub(crate) fn release(self) -> (CLK, DIO) {
        (self.clk, self.dio)
    }

    /// Data falls while clock is high.
    pub(crate) fn start(&mut self) -> Result<(), E> {
        self.clk.set_high()?;
        self.dio.set_high()?;
        self.dio.set_low()?;
        self.clk.set_low()
    }

    /// Data rises while clock is high.
    pub(crate) fn stop(&mut self) -> Result<(), E> {
        self.clk.set_low()?;
        self.dio.set_low()?;
        self.clk.set_high()?;
        self.dio.set_high()
    }

    /// Shifts out LSB first, then clocks the acknowledge slot with data released.
    pub(crate) fn write_byte(&mut self, mut data: u8) -> Result<(), E> {
        for _ in 0..8 {
            self.clk.set_low()?;
            self.dio.set_state(PinState::from(data & 0x01 != 0))?;
            data >>= 1;
            self.clk.set_high()?;
        }

        self.clk.set_low()?;
        self.dio.set_high()?;
        self.clk.set_high()
    }

    fn frame(&mut self, bytes: &[u8]) -> Result<(), E> {
        self.start()?;
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        self.stop()
    }

    /// Writes one digit register: mode frame, address+data frame, then the
    /// display control frame carrying `brightness`.
    pub(crate) fn write_digit(
        &mut self,
        address: u8,
        segments: u8,
        brightness: u8,
    ) -> Result<(), E> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "tm1637: digit {=u8} <- {=u8:#04x}, brightness {=u8}",
            address,
            segments,
            brightness
        );

        self.frame(&[command::DATA_FIXED_ADDRESS])?;
        self.frame(&[address | command::ADDRESS_BASE, segments])?;
        self.frame(&[command::DISPLAY_ON.wrapping_add(brightness)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as T};

    fn levels(states: &[State]) -> PinMock {
        let expectations: std::vec::Vec<T> = states.iter().map(|s| T::set(s.clone())).collect();
        PinMock::new(&expectations)
    }

    #[test]
    fn start_condition() {
        use State::{High, Low};
        let mut bus = Bus::new(levels(&[High, Low]), levels(&[High, Low]));
        bus.start().unwrap();
        let (mut clk, mut dio) = bus.release();
        clk.done();
        dio.done();
    }

    #[test]
    fn stop_condition() {
        use State::{High, Low};
        let mut bus = Bus::new(levels(&[Low, High]), levels(&[Low, High]));
        bus.stop().unwrap();
        let (mut clk, mut dio) = bus.release();
        clk.done();
        dio.done();
    }

    #[test]
    fn byte_is_lsb_first_with_ack_slot() {
        use State::{High, Low};
        // 0x44 = 0b0100_0100
        let clk: std::vec::Vec<State> = core::iter::repeat([Low, High]).take(9).flatten().collect();
        let dio = [Low, Low, High, Low, Low, Low, High, Low, High];

        let mut bus = Bus::new(levels(&clk), levels(&dio));
        bus.write_byte(0x44).unwrap();
        let (mut clk, mut dio) = bus.release();
        clk.done();
        dio.done();
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Line {
        Clk,
        Dio,
    }

    type Log = std::rc::Rc<core::cell::RefCell<std::vec::Vec<(Line, bool)>>>;

    struct SharedPin {
        line: Line,
        log: Log,
    }

    impl embedded_hal::digital::ErrorType for SharedPin {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for SharedPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.line, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push((self.line, true));
            Ok(())
        }
    }

    fn shared_bus() -> (Bus<SharedPin, SharedPin>, Log) {
        let log = Log::default();
        let clk = SharedPin { line: Line::Clk, log: log.clone() };
        let dio = SharedPin { line: Line::Dio, log: log.clone() };
        (Bus::new(clk, dio), log)
    }

    #[test]
    fn start_interleaves_lines_in_order() {
        use Line::{Clk, Dio};
        let (mut bus, log) = shared_bus();
        bus.start().unwrap();
        assert_eq!(
            *log.borrow(),
            [(Clk, true), (Dio, true), (Dio, false), (Clk, false)]
        );
    }

    #[test]
    fn stop_interleaves_lines_in_order() {
        use Line::{Clk, Dio};
        let (mut bus, log) = shared_bus();
        bus.stop().unwrap();
        assert_eq!(
            *log.borrow(),
            [(Clk, false), (Dio, false), (Clk, true), (Dio, true)]
        );
    }

    #[test]
    fn byte_interleaves_lines_in_order() {
        use Line::{Clk, Dio};
        let (mut bus, log) = shared_bus();
        // 0x81: bits 0 and 7 set
        bus.write_byte(0x81).unwrap();

        let mut expected = std::vec::Vec::new();
        for bit in [true, false, false, false, false, false, false, true] {
            expected.extend([(Clk, false), (Dio, bit), (Clk, true)]);
        }
        // acknowledge slot with data released
        expected.extend([(Clk, false), (Dio, true), (Clk, true)]);
        assert_eq!(*log.borrow(), expected);
    }
}
