//! Button latches shared between edge handlers and the control loop
//!
//! Edge handlers only ever store into these flags. The control loop is the
//! single consumer and clears pending flags with a swap.

use portable_atomic::{AtomicBool, Ordering};

/// Operator buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Increase,
    Decrease,
    ToggleQuantity,
    Confirm,
}

impl Button {
    const fn index(self) -> usize {
        match self {
            Button::Increase => 0,
            Button::Decrease => 1,
            Button::ToggleQuantity => 2,
            Button::Confirm => 3,
        }
    }
}

struct Latch {
    pending: AtomicBool,
    pressed: AtomicBool,
}

impl Latch {
    const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            pressed: AtomicBool::new(false),
        }
    }
}

/// Pending-press flags plus the mirrored level of each button
///
/// Lives in a `static` so edge handlers can reach it.
pub struct ButtonBank {
    latches: [Latch; 4],
}

impl Default for ButtonBank {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonBank {
    /// Create a bank with nothing pending and nothing pressed
    pub const fn new() -> Self {
        Self {
            latches: [Latch::new(), Latch::new(), Latch::new(), Latch::new()],
        }
    }

    fn latch(&self, button: Button) -> &Latch {
        &self.latches[button.index()]
    }

    /// Record an edge from the handler side
    ///
    /// `pressed` is the button's level after the edge. A press also latches
    /// the pending flag; a release leaves it alone.
    pub fn on_edge(&self, button: Button, pressed: bool) {
        let latch = self.latch(button);
        latch.pressed.store(pressed, Ordering::Release);
        if pressed {
            latch.pending.store(true, Ordering::Release);
        }
    }

    /// Latch a press without touching the level
    pub fn notify(&self, button: Button) {
        self.latch(button).pending.store(true, Ordering::Release);
    }

    /// Consume a pending press
    pub fn take(&self, button: Button) -> bool {
        self.latch(button).pending.swap(false, Ordering::AcqRel)
    }

    /// Check for a pending press without consuming it
    pub fn is_pending(&self, button: Button) -> bool {
        self.latch(button).pending.load(Ordering::Acquire)
    }

    /// Instantaneous level of the button
    pub fn is_pressed(&self, button: Button) -> bool {
        self.latch(button).pressed.load(Ordering::Acquire)
    }

    /// Consume a request to enter configuration
    ///
    /// Fires on Increase and Decrease both pending, or on ToggleQuantity
    /// pending. When it fires, all three flags are cleared. Confirm is never
    /// touched.
    pub fn take_mode_switch(&self) -> bool {
        let both = self.is_pending(Button::Increase) && self.is_pending(Button::Decrease);
        let toggle = self.is_pending(Button::ToggleQuantity);
        if !(both || toggle) {
            return false;
        }

        self.take(Button::Increase);
        self.take(Button::Decrease);
        self.take(Button::ToggleQuantity);
        true
    }
}
