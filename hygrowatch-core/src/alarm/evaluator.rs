//! Alarm confirmation and sustained-alarm handling
//!
//! Each quantity is checked on its own, temperature first. An alarm is only
//! raised when every confirmation sample is out of range; once raised it
//! blocks until a sample comes back inside the limits.

use embedded_hal::delay::DelayNs;

use crate::config::Quantity;
use crate::device::Device;
use crate::render;
use crate::traits::{CharDisplay, HumiditySensor, Indicator, SensorReading};

/// Samples taken before an alarm is believed
pub const CONFIRM_SAMPLES: u8 = 3;

/// Alarm state of one quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// Within limits, or not being looked at
    Normal,
    /// Taking confirmation samples
    Confirming,
    /// Confirmed alarm, blinking until the value recovers
    Sustained,
}

/// What happened to one quantity during an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmOutcome {
    /// Not every confirmation sample was out of range
    Unconfirmed { out_of_range: u8 },
    /// Alarm was sustained and has now cleared
    Cleared { blink_cycles: u32 },
}

impl AlarmOutcome {
    /// Whether an alarm was raised
    pub fn was_sustained(&self) -> bool {
        matches!(self, AlarmOutcome::Cleared { .. })
    }
}

/// Outcome per quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmReport {
    pub temperature: AlarmOutcome,
    pub humidity: AlarmOutcome,
}

/// Per-quantity alarm states
#[derive(Debug)]
pub struct AlarmEvaluator {
    temperature: AlarmState,
    humidity: AlarmState,
}

impl Default for AlarmEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmEvaluator {
    pub fn new() -> Self {
        Self {
            temperature: AlarmState::Normal,
            humidity: AlarmState::Normal,
        }
    }

    /// Current state of one quantity
    pub fn state(&self, quantity: Quantity) -> AlarmState {
        match quantity {
            Quantity::Temperature => self.temperature,
            Quantity::Humidity => self.humidity,
        }
    }

    fn set_state(&mut self, quantity: Quantity, state: AlarmState) {
        match quantity {
            Quantity::Temperature => self.temperature = state,
            Quantity::Humidity => self.humidity = state,
        }
    }

    /// Evaluate temperature, then humidity
    ///
    /// Blocks for the confirmation samples of both quantities and for as
    /// long as either alarm is sustained. There is no way to cancel.
    pub fn evaluate<S, D, T, P>(&mut self, device: &mut Device<'_, S, D, T, P>) -> AlarmReport
    where
        S: HumiditySensor,
        D: CharDisplay,
        T: DelayNs,
        P: Indicator,
    {
        let temperature = self.evaluate_quantity(Quantity::Temperature, device);
        let humidity = self.evaluate_quantity(Quantity::Humidity, device);
        AlarmReport {
            temperature,
            humidity,
        }
    }

    fn evaluate_quantity<S, D, T, P>(
        &mut self,
        quantity: Quantity,
        device: &mut Device<'_, S, D, T, P>,
    ) -> AlarmOutcome
    where
        S: HumiditySensor,
        D: CharDisplay,
        T: DelayNs,
        P: Indicator,
    {
        self.set_state(quantity, AlarmState::Confirming);

        let mut out_of_range = 0;
        for _ in 0..CONFIRM_SAMPLES {
            let reading = device.sample();
            if is_out_of_range(device, quantity, &reading) {
                out_of_range += 1;
            }
            device.pause_ms(device.config.timing.confirm_interval_ms);
        }

        if out_of_range < CONFIRM_SAMPLES {
            self.set_state(quantity, AlarmState::Normal);
            return AlarmOutcome::Unconfirmed { out_of_range };
        }

        self.set_state(quantity, AlarmState::Sustained);
        device.indicators.normal.set_on(false);

        let mut blink_cycles: u32 = 0;
        loop {
            let reading = device.sample();
            if !is_out_of_range(device, quantity, &reading) {
                break;
            }

            device.show(&render::alarm_screen(quantity, quantity.value_of(&reading)));
            device.indicators.alarm_for(quantity).toggle();
            device.pause_ms(device.config.timing.blink_interval_ms);
            blink_cycles = blink_cycles.saturating_add(1);
        }

        device.indicators.alarm_for(quantity).set_on(false);
        device.indicators.normal.set_on(true);
        self.set_state(quantity, AlarmState::Normal);

        AlarmOutcome::Cleared { blink_cycles }
    }
}

fn is_out_of_range<S, D, T, P>(
    device: &Device<'_, S, D, T, P>,
    quantity: Quantity,
    reading: &SensorReading,
) -> bool
where
    S: HumiditySensor,
    D: CharDisplay,
    T: DelayNs,
    P: Indicator,
{
    reading.valid && !device.thresholds().contains(quantity, quantity.value_of(reading))
}
