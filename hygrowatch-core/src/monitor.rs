//! One iteration of the monitoring loop

use embedded_hal::delay::DelayNs;

use crate::alarm::{AlarmEvaluator, AlarmReport};
use crate::config::ThresholdSet;
use crate::device::Device;
use crate::state::ConfigMachine;
use crate::traits::{CharDisplay, HumiditySensor, Indicator, SensorError, SensorReading};

/// What one monitor cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Result of this cycle's sensor poll
    pub reading: Result<SensorReading, SensorError>,
    /// Limits on leaving a configuration session, if one ran
    pub configured: Option<ThresholdSet>,
    /// Alarm evaluation, if the last reading was out of range
    pub alarms: Option<AlarmReport>,
}

/// The device plus the state machines driving it
pub struct Monitor<'a, S, D, T, P> {
    device: Device<'a, S, D, T, P>,
    machine: ConfigMachine,
    alarms: AlarmEvaluator,
}

impl<'a, S, D, T, P> Monitor<'a, S, D, T, P>
where
    S: HumiditySensor,
    D: CharDisplay,
    T: DelayNs,
    P: Indicator,
{
    pub fn new(device: Device<'a, S, D, T, P>) -> Self {
        Self {
            device,
            machine: ConfigMachine::new(),
            alarms: AlarmEvaluator::new(),
        }
    }

    pub fn device(&self) -> &Device<'a, S, D, T, P> {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut Device<'a, S, D, T, P> {
        &mut self.device
    }

    pub fn machine(&self) -> &ConfigMachine {
        &self.machine
    }

    /// Run one cycle
    ///
    /// Measure and show, enter configuration if the operator asked for it,
    /// evaluate alarms if the last good reading is out of range, then wait
    /// the poll interval. Blocks for as long as configuration or a
    /// sustained alarm lasts.
    pub fn run_cycle(&mut self) -> CycleReport {
        let device = &mut self.device;

        device.indicators.normal.set_on(true);
        let reading = device.measure();

        let configured = if device.buttons.take_mode_switch() {
            Some(self.machine.run_session(device))
        } else {
            None
        };

        let alarms = if device.thresholds().is_violated_by(&device.last_reading()) {
            Some(self.alarms.evaluate(device))
        } else {
            None
        };

        device.pause_ms(device.config.timing.poll_interval_ms);

        CycleReport {
            reading,
            configured,
            alarms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::AlarmOutcome;
    use crate::input::{Button, ButtonBank};
    use crate::mock::{mock_device, QueueSensor};

    #[test]
    fn test_quiet_cycle() {
        let bank = ButtonBank::new();
        let mut monitor = Monitor::new(mock_device(&bank, QueueSensor::steady(60, 25)));

        let report = monitor.run_cycle();

        assert_eq!(report.reading, Ok(SensorReading::new(60, 25)));
        assert_eq!(report.configured, None);
        assert_eq!(report.alarms, None);
        assert!(monitor.device().indicators.normal.is_on());
        assert_eq!(monitor.device().display.line(1), "Temp = 25 C");
        assert_eq!(monitor.device().delay.now_ms(), 1000);
    }

    #[test]
    fn test_sensor_failure_keeps_screen() {
        let bank = ButtonBank::new();
        let mut sensor = QueueSensor::new();
        sensor.push(60, 25).push_err(SensorError::Timeout);
        let mut monitor = Monitor::new(mock_device(&bank, sensor));

        monitor.run_cycle();
        let report = monitor.run_cycle();

        assert_eq!(report.reading, Err(SensorError::Timeout));
        assert_eq!(monitor.device().display.line(1), "Temp = 25 C");
        assert_eq!(monitor.device().display.clears, 1);
    }

    #[test]
    fn test_out_of_range_runs_evaluator() {
        let bank = ButtonBank::new();
        let mut sensor = QueueSensor::new();
        sensor
            .push(60, 35)
            .push(60, 35)
            .push(60, 35)
            .push(60, 35)
            .push(60, 28);
        let mut monitor = Monitor::new(mock_device(&bank, sensor));

        let report = monitor.run_cycle();

        let alarms = report.alarms.unwrap();
        assert_eq!(alarms.temperature, AlarmOutcome::Cleared { blink_cycles: 0 });
        assert!(monitor.device().indicators.normal.is_on());
    }

    #[test]
    fn test_toggle_enters_configuration() {
        let bank = ButtonBank::new();
        let mut monitor = Monitor::new(mock_device(&bank, QueueSensor::steady(60, 25)));
        bank.notify(Button::ToggleQuantity);
        monitor.device_mut().delay.hold_at(0, Button::Confirm);

        let report = monitor.run_cycle();

        assert_eq!(report.configured, Some(ThresholdSet::default()));
        assert!(!monitor.machine().is_configuring());
        assert!(!bank.is_pending(Button::ToggleQuantity));
    }

    #[test]
    fn test_configuration_can_trigger_alarm() {
        let bank = ButtonBank::new();
        let mut sensor = QueueSensor::new();
        // Measurement and three confirmations at 25 C, then 27 C
        sensor
            .push(60, 25)
            .push(60, 25)
            .push(60, 25)
            .push(60, 25)
            .push(60, 27);
        let mut monitor = Monitor::new(mock_device(&bank, sensor));
        // Both arrows pending enters configuration
        bank.notify(Button::Increase);
        bank.notify(Button::Decrease);

        {
            let clock = &mut monitor.device_mut().delay;
            // Select the low bound, then raise it past the current 25 C
            clock.tap_at(100, Button::Decrease);
            for i in 0..6 {
                clock.hold_at(2000 + i * 2000, Button::Increase);
            }
            clock.hold_at(15000, Button::Confirm);
        }

        let report = monitor.run_cycle();

        let thresholds = report.configured.unwrap();
        assert_eq!(thresholds.temp_low, 26);
        let alarms = report.alarms.unwrap();
        assert_eq!(alarms.temperature, AlarmOutcome::Cleared { blink_cycles: 0 });
    }
}
