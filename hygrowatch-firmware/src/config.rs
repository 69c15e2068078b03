//! Boot configuration
//!
//! `build.rs` turns device.toml into the `DEVICE_CONFIG` constant below.

use defmt::*;
use hygrowatch_core::config::{DeviceConfig, ThresholdSet, Timing};

include!(concat!(env!("OUT_DIR"), "/device_config.rs"));

/// Configuration to boot with
///
/// Falls back to the built-in defaults if the generated values do not
/// validate.
pub fn boot_config() -> DeviceConfig {
    match DEVICE_CONFIG.validate() {
        Ok(()) => DEVICE_CONFIG,
        Err(e) => {
            warn!("Invalid device config ({}), using defaults", e);
            DeviceConfig::default()
        }
    }
}
