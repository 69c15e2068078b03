//! Screen layouts for the 16x2 panel
//!
//! Each screen is built in a fixed-capacity buffer on the stack and drawn
//! in one go.

use core::fmt::Write;

use heapless::String;

use crate::config::{Bound, Quantity, ThresholdSet};
use crate::state::Selection;
use crate::traits::{CharDisplay, DisplayError, DisplayExt, SensorReading};

/// One row of text
pub type Line = String<16>;

/// Contents of both rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub top: Line,
    pub bottom: Line,
}

impl Screen {
    /// Clear the panel and draw both rows
    pub fn draw<D: CharDisplay>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.show_lines(&self.top, &self.bottom)
    }
}

fn line(text: &str) -> Line {
    let mut out = Line::new();
    // Longer than a row is truncated
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Splash shown while the firmware starts
pub fn boot_screen() -> Screen {
    Screen {
        top: line("Hygrowatch"),
        bottom: line("Starting..."),
    }
}

/// Live measurement
pub fn reading_screen(reading: &SensorReading) -> Screen {
    let mut top = Line::new();
    let mut bottom = Line::new();
    let _ = write!(top, "Temp = {} C", reading.temperature);
    let _ = write!(bottom, "Humi = {} %", reading.humidity);
    Screen { top, bottom }
}

/// Currently selected limit and its value
pub fn threshold_screen(selection: Selection, thresholds: &ThresholdSet) -> Screen {
    let top = match selection.bound {
        Bound::High => line("Alarm High Limit"),
        Bound::Low => line("Alarm Low Limit"),
    };

    let suffix = match selection.bound {
        Bound::High => "HI",
        Bound::Low => "LO",
    };
    let unit = match selection.quantity {
        Quantity::Temperature => "C",
        Quantity::Humidity => "%",
    };

    let mut bottom = Line::new();
    let _ = write!(
        bottom,
        "{}_{} = {}{}",
        selection.quantity.label(),
        suffix,
        thresholds.get(selection.quantity, selection.bound),
        unit
    );
    Screen { top, bottom }
}

/// Alarm banner with the offending value
pub fn alarm_screen(quantity: Quantity, value: u8) -> Screen {
    let unit = match quantity {
        Quantity::Temperature => "C",
        Quantity::Humidity => "%",
    };

    let mut bottom = Line::new();
    let _ = write!(bottom, "{} = {} {}", quantity.label(), value, unit);
    Screen {
        top: line("!!! ALARM !!!"),
        bottom,
    }
}
