//! RP2040-specific HAL for the Hygrowatch firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `hygrowatch-hal` traits on top of `embassy-rp` GPIO drivers:
//!
//! - Push-pull outputs for LEDs and the display bus
//! - Direction-switching pin for the sensor data line
//! - Board pin map (which GPIO does what)

#![no_std]

pub mod gpio;
pub mod pins;

// Re-export shared traits from hygrowatch-hal for convenience
pub use hygrowatch_hal::{Direction, FlexPin, InputPin, Level, OutputPin};
