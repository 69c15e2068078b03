//! Settle-and-resample debouncing
//!
//! A pending flag says a press happened at some point. After the settle
//! delay the button's level tells a tap (released) from a hold (still down).

use embedded_hal::delay::DelayNs;

use super::latch::{Button, ButtonBank};

/// A debounced button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    /// Which button
    pub button: Button,
    /// Still pressed after the settle delay
    pub held: bool,
}

impl ButtonEvent {
    /// A tap event
    pub fn tap(button: Button) -> Self {
        Self {
            button,
            held: false,
        }
    }

    /// A held event
    pub fn hold(button: Button) -> Self {
        Self { button, held: true }
    }
}

/// Turns latched presses into debounced events
pub struct Debouncer<'a> {
    bank: &'a ButtonBank,
    settle_ms: u32,
}

impl<'a> Debouncer<'a> {
    /// Create a debouncer over a button bank
    pub fn new(bank: &'a ButtonBank, settle_ms: u32) -> Self {
        Self { bank, settle_ms }
    }

    /// Consume one button's pending press
    ///
    /// Returns `None` if nothing is pending. ToggleQuantity is tap-only and
    /// returns immediately; every other button blocks for the settle delay
    /// before its level is re-sampled.
    pub fn poll(&self, button: Button, delay: &mut impl DelayNs) -> Option<ButtonEvent> {
        if !self.bank.take(button) {
            return None;
        }

        if button == Button::ToggleQuantity {
            return Some(ButtonEvent::tap(button));
        }

        delay.delay_ms(self.settle_ms);
        Some(ButtonEvent {
            button,
            held: self.bank.is_pressed(button),
        })
    }
}
