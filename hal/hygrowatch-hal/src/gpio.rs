//! GPIO pin abstractions
//!
//! Provides traits for digital input, output and direction-switching pins.
//! Every operation is infallible: pins are claimed at startup, after which a
//! GPIO read or write cannot fail on the supported chips.

/// Logic level on a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Level for a boolean "is high" value
    pub fn from_high(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Check if this is the high level
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// High impedance, level readable
    Input,
    /// Actively driven
    Output,
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Set the pin to a specific level
    fn write(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Toggle the pin state
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Read the instantaneous level
    fn read(&self) -> Level {
        Level::from_high(self.is_high())
    }
}

/// Pin whose direction can be switched at runtime
///
/// Single-wire buses share one line between host and device: the host
/// drives it to signal, then releases it (input with pull-up) so the device
/// can answer. Reads are only meaningful while the pin is an input.
pub trait FlexPin: OutputPin + InputPin {
    /// Switch the pin direction
    fn set_direction(&mut self, direction: Direction);
}
