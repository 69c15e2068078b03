//! Threshold configuration state machine and its blocking session

mod machine;
mod session;

pub use machine::{ConfigMachine, ConfigState, Selection};
