//! Button edge tasks
//!
//! One task per button. They only mirror the button into its latch: the
//! control loop does all debouncing and decides what a press means.

use defmt::*;
use embassy_rp::gpio::Input;
use hygrowatch_core::input::{Button, ButtonBank};

/// Latches shared with the control loop
pub static BUTTONS: ButtonBank = ButtonBank::new();

/// Button task - latches presses and mirrors the level of one button
///
/// Buttons are active-low. The waits are level-triggered, so an edge lost
/// while the task was not armed cannot leave the mirrored level stale: the
/// next wait returns at once and the latch catches up.
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    debug!("Button task started: {}", button);

    loop {
        pin.wait_for_low().await;
        BUTTONS.on_edge(button, true);

        pin.wait_for_high().await;
        BUTTONS.on_edge(button, false);
    }
}
