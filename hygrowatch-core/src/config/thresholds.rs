//! Alarm limits and their adjustment rules
//!
//! The limits are only ever changed one step at a time through
//! [`ThresholdSet::increase`] and [`ThresholdSet::decrease`]. Those guards
//! keep every pair ordered and inside the allowed range; a step that would
//! break a rule is silently dropped.

use crate::traits::SensorReading;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest temperature limit (°C)
pub const TEMPERATURE_MIN: u8 = 0;
/// Highest temperature limit (°C)
pub const TEMPERATURE_MAX: u8 = 50;
/// Temperature adjustment step (°C)
pub const TEMPERATURE_STEP: u8 = 1;

/// Lowest humidity limit (%)
pub const HUMIDITY_MIN: u8 = 10;
/// Highest humidity limit (%)
pub const HUMIDITY_MAX: u8 = 90;
/// Humidity adjustment step (%)
pub const HUMIDITY_STEP: u8 = 10;

/// Monitored quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    Temperature,
    Humidity,
}

impl Quantity {
    /// The other quantity
    pub fn toggled(self) -> Self {
        match self {
            Quantity::Temperature => Quantity::Humidity,
            Quantity::Humidity => Quantity::Temperature,
        }
    }

    /// Extract this quantity's value from a reading
    pub fn value_of(self, reading: &SensorReading) -> u8 {
        match self {
            Quantity::Temperature => reading.temperature,
            Quantity::Humidity => reading.humidity,
        }
    }

    /// Short upper-case label used on screen
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Temperature => "TEMP",
            Quantity::Humidity => "HUMI",
        }
    }
}

/// Which end of a limit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bound {
    High,
    Low,
}

/// Threshold validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdError {
    /// A low limit is above its high limit
    Inverted(Quantity),
    /// A limit lies outside the allowed range
    OutOfRange(Quantity),
    /// A humidity limit is not a multiple of the step
    OffStep,
}

/// Operator-set alarm limits, all inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdSet {
    /// Upper temperature limit (°C)
    pub temp_high: u8,
    /// Lower temperature limit (°C)
    pub temp_low: u8,
    /// Upper humidity limit (%)
    pub hum_high: u8,
    /// Lower humidity limit (%)
    pub hum_low: u8,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            temp_high: 30,
            temp_low: 20,
            hum_high: 70,
            hum_low: 50,
        }
    }
}

impl ThresholdSet {
    /// Get one limit
    pub fn get(&self, quantity: Quantity, bound: Bound) -> u8 {
        match (quantity, bound) {
            (Quantity::Temperature, Bound::High) => self.temp_high,
            (Quantity::Temperature, Bound::Low) => self.temp_low,
            (Quantity::Humidity, Bound::High) => self.hum_high,
            (Quantity::Humidity, Bound::Low) => self.hum_low,
        }
    }

    fn slot(&mut self, quantity: Quantity, bound: Bound) -> &mut u8 {
        match (quantity, bound) {
            (Quantity::Temperature, Bound::High) => &mut self.temp_high,
            (Quantity::Temperature, Bound::Low) => &mut self.temp_low,
            (Quantity::Humidity, Bound::High) => &mut self.hum_high,
            (Quantity::Humidity, Bound::Low) => &mut self.hum_low,
        }
    }

    /// Check if a value lies within `[low, high]` for a quantity
    pub fn contains(&self, quantity: Quantity, value: u8) -> bool {
        let low = self.get(quantity, Bound::Low);
        let high = self.get(quantity, Bound::High);
        value >= low && value <= high
    }

    /// Check if a reading violates any limit
    ///
    /// A reading that was never valid cannot violate anything.
    pub fn is_violated_by(&self, reading: &SensorReading) -> bool {
        reading.valid
            && (!self.contains(Quantity::Temperature, reading.temperature)
                || !self.contains(Quantity::Humidity, reading.humidity))
    }

    /// Raise one limit by a step, if the rules allow it
    ///
    /// Temperature high stops at [`TEMPERATURE_MAX`], humidity high at
    /// [`HUMIDITY_MAX`], and a low limit never passes its high limit.
    pub fn increase(&mut self, quantity: Quantity, bound: Bound) {
        let step = step_of(quantity);
        let ceiling = match bound {
            Bound::High => max_of(quantity),
            Bound::Low => self.get(quantity, Bound::High),
        };

        let slot = self.slot(quantity, bound);
        if let Some(next) = slot.checked_add(step) {
            if next <= ceiling {
                *slot = next;
            }
        }
    }

    /// Lower one limit by a step, if the rules allow it
    ///
    /// Temperature low stops at [`TEMPERATURE_MIN`], humidity low at
    /// [`HUMIDITY_MIN`], and a high limit never passes its low limit.
    pub fn decrease(&mut self, quantity: Quantity, bound: Bound) {
        let step = step_of(quantity);
        let floor = match bound {
            Bound::High => self.get(quantity, Bound::Low),
            Bound::Low => min_of(quantity),
        };

        let slot = self.slot(quantity, bound);
        if let Some(next) = slot.checked_sub(step) {
            if next >= floor {
                *slot = next;
            }
        }
    }

    /// Check every invariant
    ///
    /// Adjustments through `increase`/`decrease` cannot break these; this is
    /// for limits coming from configuration.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for quantity in [Quantity::Temperature, Quantity::Humidity] {
            let low = self.get(quantity, Bound::Low);
            let high = self.get(quantity, Bound::High);
            if low > high {
                return Err(ThresholdError::Inverted(quantity));
            }
            if low < min_of(quantity) || high > max_of(quantity) {
                return Err(ThresholdError::OutOfRange(quantity));
            }
        }

        if self.hum_low % HUMIDITY_STEP != 0 || self.hum_high % HUMIDITY_STEP != 0 {
            return Err(ThresholdError::OffStep);
        }

        Ok(())
    }
}

fn step_of(quantity: Quantity) -> u8 {
    match quantity {
        Quantity::Temperature => TEMPERATURE_STEP,
        Quantity::Humidity => HUMIDITY_STEP,
    }
}

fn min_of(quantity: Quantity) -> u8 {
    match quantity {
        Quantity::Temperature => TEMPERATURE_MIN,
        Quantity::Humidity => HUMIDITY_MIN,
    }
}

fn max_of(quantity: Quantity) -> u8 {
    match quantity {
        Quantity::Temperature => TEMPERATURE_MAX,
        Quantity::Humidity => HUMIDITY_MAX,
    }
}
