//! Board-agnostic core logic for the temperature/humidity alarm
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensor, character display, indicator)
//! - Threshold limits and their clamping rules
//! - Button latches written from edge handlers, plus the settle-and-resample
//!   debouncer
//! - Threshold configuration state machine
//! - Alarm evaluation with confirmation sampling
//! - One iteration of the monitoring loop
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod device;
pub mod input;
pub mod monitor;
pub mod render;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
