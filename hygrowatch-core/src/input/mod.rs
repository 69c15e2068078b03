//! Operator input: edge latches and debouncing

mod debounce;
mod latch;

pub use debounce::{ButtonEvent, Debouncer};
pub use latch::{Button, ButtonBank};
