//! Blocking configuration session

use embedded_hal::delay::DelayNs;

use super::machine::{ConfigMachine, ConfigState};
use crate::config::ThresholdSet;
use crate::device::Device;
use crate::input::{Button, Debouncer};
use crate::render;
use crate::traits::{CharDisplay, HumiditySensor, Indicator};

/// Buttons in the order each iteration checks them
const POLL_ORDER: [Button; 4] = [
    Button::Confirm,
    Button::ToggleQuantity,
    Button::Increase,
    Button::Decrease,
];

impl ConfigMachine {
    /// Run a configuration session until Confirm is held
    ///
    /// The normal indicator is off for the whole session. Each iteration
    /// consumes pending presses, redraws the selected limit and waits the
    /// refresh interval. Returns the limits in effect on exit.
    pub fn run_session<S, D, T, P>(&mut self, device: &mut Device<'_, S, D, T, P>) -> ThresholdSet
    where
        S: HumiditySensor,
        D: CharDisplay,
        T: DelayNs,
        P: Indicator,
    {
        self.enter();
        device.indicators.normal.set_on(false);

        let debouncer = Debouncer::new(device.buttons, device.config.timing.settle_ms);

        loop {
            for button in POLL_ORDER {
                let Some(event) = debouncer.poll(button, &mut device.delay) else {
                    continue;
                };
                if self.handle(event, &mut device.config.thresholds) == ConfigState::Idle {
                    return device.config.thresholds;
                }
            }

            let screen = render::threshold_screen(self.selection(), &device.config.thresholds);
            device.show(&screen);
            device.pause_ms(device.config.timing.refresh_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bound, Quantity};
    use crate::input::ButtonBank;
    use crate::mock::{mock_device, QueueSensor};

    #[test]
    fn test_hold_increase_then_confirm() {
        let bank = ButtonBank::new();
        let mut device = mock_device(&bank, QueueSensor::steady(60, 25));
        device.indicators.normal.set_on(true);
        device.delay.hold_at(0, Button::Increase);
        device.delay.hold_at(2000, Button::Confirm);

        let mut machine = ConfigMachine::new();
        let thresholds = machine.run_session(&mut device);

        assert_eq!(thresholds.temp_high, 31);
        assert_eq!(device.config.thresholds.temp_high, 31);
        assert!(!machine.is_configuring());
        assert!(!device.indicators.normal.is_on());
        assert!(device.display.wrote("TEMP_HI = 31C"));
        assert_eq!(device.delay.now_ms(), 3000);
    }

    #[test]
    fn test_tap_selects_without_adjusting() {
        let bank = ButtonBank::new();
        let mut device = mock_device(&bank, QueueSensor::steady(60, 25));
        device.delay.tap_at(0, Button::Decrease);
        device.delay.tap_at(1500, Button::ToggleQuantity);
        device.delay.hold_at(2000, Button::Confirm);

        let mut machine = ConfigMachine::new();
        let thresholds = machine.run_session(&mut device);

        assert_eq!(thresholds, ThresholdSet::default());
        assert_eq!(machine.selection().bound, Bound::Low);
        assert_eq!(machine.selection().quantity, Quantity::Humidity);
        assert!(device.display.wrote("Alarm Low Limit"));
        assert!(device.display.wrote("HUMI_LO = 50%"));
    }

    #[test]
    fn test_confirm_tap_does_not_exit() {
        let bank = ButtonBank::new();
        let mut device = mock_device(&bank, QueueSensor::steady(60, 25));
        device.delay.tap_at(0, Button::Confirm);
        device.delay.hold_at(1600, Button::Confirm);

        let mut machine = ConfigMachine::new();
        machine.run_session(&mut device);

        // First settle ends at 1000 with the button up, second at 2600+
        assert!(device.delay.now_ms() > 2000);
    }
}
