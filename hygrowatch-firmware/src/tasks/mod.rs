//! Embassy async tasks
//!
//! Only the button edge handlers are async; they run on the interrupt
//! executor and talk to the blocking control loop through latches.

pub mod buttons;

pub use buttons::{button_task, BUTTONS};
