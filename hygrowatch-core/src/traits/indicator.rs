//! Status indicator trait

/// Trait for on/off status indicators (LEDs)
pub trait Indicator {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;

    /// Flip the indicator
    fn toggle(&mut self) {
        let on = self.is_on();
        self.set_on(!on);
    }
}
