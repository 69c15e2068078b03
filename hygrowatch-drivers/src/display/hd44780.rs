//! HD44780 16x2 character LCD on a 4-bit bus
//!
//! RW is tied to ground, so the busy flag is never read; every write waits
//! out the worst-case execution time instead.

use embedded_hal::delay::DelayNs;
use hygrowatch_core::traits::display::check_position;
use hygrowatch_core::traits::{CharDisplay, DisplayError};
use hygrowatch_hal::{Level, OutputPin};

/// Instruction codes
mod cmd {
    pub const CLEAR: u8 = 0x01;
    /// Entry mode: increment, no shift
    pub const ENTRY_INCREMENT: u8 = 0x06;
    pub const DISPLAY_OFF: u8 = 0x08;
    /// Display on, cursor and blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Function set: 4-bit bus, 2 lines, 5x8 font
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM: u8 = 0x80;
}

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Settle time after most instructions
const COMMAND_US: u32 = 50;
/// Settle time after clear/home
const CLEAR_US: u32 = 2000;
/// Settle time after each character
const DATA_US: u32 = 120;

/// 4-bit HD44780 driver
///
/// `data` is D4..D7 in that order.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create the driver and run the power-on initialisation
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        let mut lcd = Self { rs, en, data, delay };
        lcd.init();
        lcd
    }

    fn init(&mut self) {
        self.rs.set_low();
        self.en.set_low();
        self.delay.delay_ms(15);

        // Reset by instruction: three 8-bit function sets, then 4-bit
        self.write_nibble(0x3);
        self.delay.delay_ms(5);
        self.write_nibble(0x3);
        self.delay.delay_us(100);
        self.write_nibble(0x3);
        self.delay.delay_us(COMMAND_US);
        self.write_nibble(0x2);
        self.delay.delay_us(COMMAND_US);

        self.command(cmd::FUNCTION_4BIT_2LINE);
        self.command(cmd::DISPLAY_OFF);
        self.command(cmd::CLEAR);
        self.command(cmd::ENTRY_INCREMENT);
        self.command(cmd::DISPLAY_ON);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.write(Level::from_high(nibble & (1 << bit) != 0));
        }
        self.en.set_high();
        self.delay.delay_us(1);
        self.en.set_low();
        self.delay.delay_us(1);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    fn command(&mut self, instruction: u8) {
        self.rs.set_low();
        self.write_byte(instruction);
        let settle = if instruction == cmd::CLEAR {
            CLEAR_US
        } else {
            COMMAND_US
        };
        self.delay.delay_us(settle);
    }

    fn data(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
        self.delay.delay_us(DATA_US);
    }
}

impl<P: OutputPin, D: DelayNs> CharDisplay for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        check_position(col, row)?;
        let address = ROW_OFFSETS[usize::from(row - 1)] + (col - 1);
        self.command(cmd::SET_DDRAM | address);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            // The character ROM only matches ASCII
            let byte = if byte.is_ascii() && !byte.is_ascii_control() {
                byte
            } else {
                b'?'
            };
            self.data(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Bus {
        rs: bool,
        en: bool,
        data: [bool; 4],
        /// (rs, nibble) latched on every falling edge of EN
        latched: Vec<(bool, u8)>,
    }

    #[derive(Clone, Copy)]
    enum Line {
        Rs,
        En,
        Data(usize),
    }

    struct BusPin {
        bus: Rc<RefCell<Bus>>,
        line: Line,
    }

    impl BusPin {
        fn set(&mut self, high: bool) {
            let mut bus = self.bus.borrow_mut();
            match self.line {
                Line::Rs => bus.rs = high,
                Line::Data(i) => bus.data[i] = high,
                Line::En => {
                    if bus.en && !high {
                        let nibble = bus
                            .data
                            .iter()
                            .enumerate()
                            .fold(0u8, |acc, (i, &b)| acc | (u8::from(b) << i));
                        let rs = bus.rs;
                        bus.latched.push((rs, nibble));
                    }
                    bus.en = high;
                }
            }
        }
    }

    impl OutputPin for BusPin {
        fn set_high(&mut self) {
            self.set(true);
        }

        fn set_low(&mut self) {
            self.set(false);
        }

        fn is_set_high(&self) -> bool {
            let bus = self.bus.borrow();
            match self.line {
                Line::Rs => bus.rs,
                Line::En => bus.en,
                Line::Data(i) => bus.data[i],
            }
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.ns += u64::from(ns);
        }
    }

    fn lcd() -> (Hd44780<BusPin, CountingDelay>, Rc<RefCell<Bus>>) {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pin = |line| BusPin {
            bus: bus.clone(),
            line,
        };
        let lcd = Hd44780::new(
            pin(Line::Rs),
            pin(Line::En),
            [
                pin(Line::Data(0)),
                pin(Line::Data(1)),
                pin(Line::Data(2)),
                pin(Line::Data(3)),
            ],
            CountingDelay::default(),
        );
        (lcd, bus)
    }

    /// Pair latched nibbles into (rs, byte)
    fn bytes(latched: &[(bool, u8)]) -> Vec<(bool, u8)> {
        latched
            .chunks(2)
            .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let (_lcd, bus) = lcd();
        let latched = bus.borrow().latched.clone();

        assert_eq!(
            &latched[..4],
            &[(false, 0x3), (false, 0x3), (false, 0x3), (false, 0x2)]
        );
        assert_eq!(
            bytes(&latched[4..]),
            vec![
                (false, 0x28),
                (false, 0x08),
                (false, 0x01),
                (false, 0x06),
                (false, 0x0C)
            ]
        );
    }

    #[test]
    fn test_cursor_addresses() {
        let (mut lcd, bus) = lcd();
        bus.borrow_mut().latched.clear();

        lcd.set_cursor(1, 1).unwrap();
        lcd.set_cursor(16, 1).unwrap();
        lcd.set_cursor(1, 2).unwrap();
        lcd.set_cursor(5, 2).unwrap();

        assert_eq!(
            bytes(&bus.borrow().latched),
            vec![(false, 0x80), (false, 0x8F), (false, 0xC0), (false, 0xC4)]
        );
    }

    #[test]
    fn test_cursor_out_of_range() {
        let (mut lcd, bus) = lcd();
        bus.borrow_mut().latched.clear();

        assert_eq!(lcd.set_cursor(17, 1), Err(DisplayError::InvalidPosition));
        assert_eq!(lcd.set_cursor(1, 0), Err(DisplayError::InvalidPosition));
        assert!(bus.borrow().latched.is_empty());
    }

    #[test]
    fn test_write_text_sends_data() {
        let (mut lcd, bus) = lcd();
        bus.borrow_mut().latched.clear();

        lcd.write_text("Hi°").unwrap();

        // '°' is two UTF-8 bytes, each replaced
        assert_eq!(
            bytes(&bus.borrow().latched),
            vec![(true, b'H'), (true, b'i'), (true, b'?'), (true, b'?')]
        );
    }

    #[test]
    fn test_character_latency_bounded() {
        let (mut lcd, _bus) = lcd();
        let before = lcd.delay.ns;
        lcd.write_text("A").unwrap();
        let per_char_us = (lcd.delay.ns - before) / 1000;
        assert!((100..=150).contains(&per_char_us));
    }
}
