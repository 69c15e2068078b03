//! Board pin map
//!
//! Fixed GPIO assignment for the Pico carrier board:
//!
//! | Function            | GPIO |
//! |---------------------|------|
//! | LCD RS / EN         | 0 / 1 |
//! | LCD D4-D7           | 2-5  |
//! | Button increase     | 10   |
//! | Button decrease     | 11   |
//! | Button temp/hum     | 12   |
//! | Button confirm      | 13   |
//! | DHT11 data          | 15   |
//! | LED normal (green)  | 16   |
//! | LED temp (red)      | 17   |
//! | LED humidity (yellow) | 18 |

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};

/// LCD bus pins (4-bit mode, RW tied to ground)
pub struct LcdPins {
    pub rs: Peri<'static, AnyPin>,
    pub en: Peri<'static, AnyPin>,
    /// D4, D5, D6, D7
    pub data: [Peri<'static, AnyPin>; 4],
}

/// Front panel buttons, all active-low
pub struct ButtonPins {
    pub increase: Peri<'static, AnyPin>,
    pub decrease: Peri<'static, AnyPin>,
    pub toggle_quantity: Peri<'static, AnyPin>,
    pub confirm: Peri<'static, AnyPin>,
}

/// Status LEDs
pub struct LedPins {
    pub normal: Peri<'static, AnyPin>,
    pub temperature: Peri<'static, AnyPin>,
    pub humidity: Peri<'static, AnyPin>,
}

/// Every GPIO the firmware uses, split by function
pub struct BoardPins {
    pub lcd: LcdPins,
    pub buttons: ButtonPins,
    pub leds: LedPins,
    pub sensor: Peri<'static, AnyPin>,
}

impl BoardPins {
    /// Take the board's pins from the peripherals
    pub fn take(p: Peripherals) -> Self {
        Self {
            lcd: LcdPins {
                rs: p.PIN_0.into(),
                en: p.PIN_1.into(),
                data: [p.PIN_2.into(), p.PIN_3.into(), p.PIN_4.into(), p.PIN_5.into()],
            },
            buttons: ButtonPins {
                increase: p.PIN_10.into(),
                decrease: p.PIN_11.into(),
                toggle_quantity: p.PIN_12.into(),
                confirm: p.PIN_13.into(),
            },
            leds: LedPins {
                normal: p.PIN_16.into(),
                temperature: p.PIN_17.into(),
                humidity: p.PIN_18.into(),
            },
            sensor: p.PIN_15.into(),
        }
    }
}
