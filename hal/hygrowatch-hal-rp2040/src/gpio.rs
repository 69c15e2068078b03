//! GPIO wrappers
//!
//! Newtypes over the `embassy-rp` drivers so the shared traits can be
//! implemented for them.

use embassy_rp::gpio::{self, Flex, Input, Output, Pin, Pull};
use embassy_rp::Peri;

use hygrowatch_hal::{Direction, FlexPin, InputPin, OutputPin};

/// Push-pull output (LEDs, display bus lines)
pub struct RpOutput<'d> {
    inner: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Claim a pin as an output, starting low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            inner: Output::new(pin, gpio::Level::Low),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }

    fn toggle(&mut self) {
        self.inner.toggle();
    }
}

/// Open-drain style data line for single-wire sensors
///
/// Kept as an input with pull-up while idle. Driving it high only happens
/// for the few microseconds of the start signal, as the sensor protocol
/// requires.
pub struct RpFlex<'d> {
    inner: Flex<'d>,
}

impl<'d> RpFlex<'d> {
    /// Claim a pin for a single-wire bus, released (input, pulled up)
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut inner = Flex::new(pin);
        inner.set_pull(Pull::Up);
        inner.set_as_input();
        Self { inner }
    }
}

impl OutputPin for RpFlex<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

impl InputPin for RpFlex<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}

impl FlexPin for RpFlex<'_> {
    fn set_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Input => self.inner.set_as_input(),
            Direction::Output => self.inner.set_as_output(),
        }
    }
}

/// Create an active-low button input (pull-up, pressed = low)
///
/// Buttons are owned by their edge tasks, which need the async
/// `wait_for_*_edge` API, so the raw `embassy-rp` type is returned.
pub fn button_input<'d>(pin: Peri<'d, impl Pin>) -> Input<'d> {
    Input::new(pin, Pull::Up)
}
