//! Threshold configuration state machine
//!
//! Adjustments are a pure function of the current state, a debounced button
//! event and the limits being edited.

use crate::config::{Bound, Quantity, ThresholdSet};
use crate::input::{Button, ButtonEvent};

/// The limit currently being browsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    pub quantity: Quantity,
    pub bound: Bound,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            quantity: Quantity::Temperature,
            bound: Bound::High,
        }
    }
}

/// Configuration states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigState {
    /// Normal monitoring
    Idle,
    /// Operator is browsing/adjusting limits
    Configuring(Selection),
}

impl ConfigState {
    /// Process an event and return the next state
    ///
    /// Held Increase/Decrease adjust `thresholds` in place. Events in `Idle`
    /// are ignored: entry is decided from the raw pending flags.
    pub fn transition(self, event: ButtonEvent, thresholds: &mut ThresholdSet) -> Self {
        use ConfigState::*;

        let selection = match self {
            Idle => return Idle,
            Configuring(selection) => selection,
        };

        match (event.button, event.held) {
            (Button::ToggleQuantity, _) => Configuring(Selection {
                quantity: selection.quantity.toggled(),
                ..selection
            }),

            (Button::Increase, false) => Configuring(Selection {
                bound: Bound::High,
                ..selection
            }),
            (Button::Increase, true) => {
                thresholds.increase(selection.quantity, selection.bound);
                self
            }

            (Button::Decrease, false) => Configuring(Selection {
                bound: Bound::Low,
                ..selection
            }),
            (Button::Decrease, true) => {
                thresholds.decrease(selection.quantity, selection.bound);
                self
            }

            (Button::Confirm, true) => Idle,
            (Button::Confirm, false) => self,
        }
    }
}

/// Configuration state plus the selection remembered between sessions
#[derive(Debug)]
pub struct ConfigMachine {
    state: ConfigState,
    selection: Selection,
}

impl Default for ConfigMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigMachine {
    pub fn new() -> Self {
        Self {
            state: ConfigState::Idle,
            selection: Selection::default(),
        }
    }

    pub fn state(&self) -> ConfigState {
        self.state
    }

    pub fn is_configuring(&self) -> bool {
        matches!(self.state, ConfigState::Configuring(_))
    }

    /// Selection shown on the next redraw
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Start a session where the last one left off
    pub fn enter(&mut self) {
        self.state = ConfigState::Configuring(self.selection);
    }

    /// Feed one event
    pub fn handle(&mut self, event: ButtonEvent, thresholds: &mut ThresholdSet) -> ConfigState {
        self.state = self.state.transition(event, thresholds);
        if let ConfigState::Configuring(selection) = self.state {
            self.selection = selection;
        }
        self.state
    }
}
