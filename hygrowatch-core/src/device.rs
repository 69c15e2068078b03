//! Owned device context
//!
//! Everything the control loop touches lives in one [`Device`] that is
//! passed by mutable reference to the configuration session and the alarm
//! evaluator. The only state shared with edge handlers is the
//! [`ButtonBank`].

use embedded_hal::delay::DelayNs;

use crate::config::{DeviceConfig, Quantity, ThresholdSet};
use crate::input::ButtonBank;
use crate::render::{self, Screen};
use crate::traits::{CharDisplay, HumiditySensor, Indicator, SensorError, SensorReading};

/// Status LEDs
#[derive(Debug, Default)]
pub struct Indicators<P> {
    /// Lit during normal operation
    pub normal: P,
    /// Blinks while a temperature alarm is sustained
    pub temperature: P,
    /// Blinks while a humidity alarm is sustained
    pub humidity: P,
}

impl<P: Indicator> Indicators<P> {
    pub fn new(normal: P, temperature: P, humidity: P) -> Self {
        Self {
            normal,
            temperature,
            humidity,
        }
    }

    /// The alarm LED for a quantity
    pub fn alarm_for(&mut self, quantity: Quantity) -> &mut P {
        match quantity {
            Quantity::Temperature => &mut self.temperature,
            Quantity::Humidity => &mut self.humidity,
        }
    }
}

/// Sensor, panel, LEDs, delay source and settings of one device
pub struct Device<'a, S, D, T, P> {
    pub sensor: S,
    pub display: D,
    pub delay: T,
    pub indicators: Indicators<P>,
    pub buttons: &'a ButtonBank,
    pub config: DeviceConfig,
    last_reading: SensorReading,
}

impl<'a, S, D, T, P> Device<'a, S, D, T, P>
where
    S: HumiditySensor,
    D: CharDisplay,
    T: DelayNs,
    P: Indicator,
{
    pub fn new(
        sensor: S,
        display: D,
        delay: T,
        indicators: Indicators<P>,
        buttons: &'a ButtonBank,
        config: DeviceConfig,
    ) -> Self {
        Self {
            sensor,
            display,
            delay,
            indicators,
            buttons,
            config,
            last_reading: SensorReading::default(),
        }
    }

    /// Most recent good reading (invalid until the first successful poll)
    pub fn last_reading(&self) -> SensorReading {
        self.last_reading
    }

    /// Current alarm limits
    pub fn thresholds(&self) -> &ThresholdSet {
        &self.config.thresholds
    }

    /// Poll the sensor and show the result
    ///
    /// On failure the previous reading is kept and the panel is left as is.
    pub fn measure(&mut self) -> Result<SensorReading, SensorError> {
        let reading = self.sensor.poll()?;
        self.last_reading = reading;
        self.show(&render::reading_screen(&reading));
        Ok(reading)
    }

    /// Poll the sensor without touching the panel
    ///
    /// Falls back to the previous reading if the poll fails.
    pub fn sample(&mut self) -> SensorReading {
        if let Ok(reading) = self.sensor.poll() {
            self.last_reading = reading;
        }
        self.last_reading
    }

    /// Draw a screen, dropping panel errors
    pub fn show(&mut self, screen: &Screen) {
        let _ = screen.draw(&mut self.display);
    }

    /// Block for a number of milliseconds
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
