//! GPIO status LED
//!
//! An LED wired directly to a GPIO, either sourcing (active-high) or
//! sinking (active-low) current.

use hygrowatch_core::traits::Indicator;
use hygrowatch_hal::OutputPin;

/// LED on a GPIO pin
pub struct GpioLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Create a new LED, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false);
        led
    }

    /// LED between the pin and ground
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// LED between the supply and the pin
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Indicator for GpioLed<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
