//! Hygrowatch Hardware Abstraction Layer
//!
//! This crate defines the digital I/O capability that the sensor decoder,
//! the character display driver and the indicator LEDs are written against.
//! Chip-specific crates implement it; the portable crates never touch
//! registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  hygrowatch-firmware                    │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ hygrowatch-core │◄──│ hygrowatch-     │
//! │                 │   │ drivers         │
//! └─────────────────┘   └─────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────┐
//! │  hygrowatch-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ hygrowatch-hal-     │
//!          │    rp2040           │
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Fixed-direction digital I/O
//! - [`gpio::FlexPin`] - Bidirectional pin for half-duplex single-wire buses

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{Direction, FlexPin, InputPin, Level, OutputPin};
