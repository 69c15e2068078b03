//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hygrowatch-core, written against the pin traits of hygrowatch-hal:
//!
//! - Humidity/temperature sensors (DHT11 single-wire)
//! - Character displays (HD44780, 4-bit bus)
//! - Status indicators (GPIO LEDs)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod sensor;
