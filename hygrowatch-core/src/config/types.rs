//! Device configuration type definitions
//!
//! These are deserialized from `device.toml` at build time (behind the
//! `serde` feature) and validated again at startup.

use super::thresholds::{ThresholdError, ThresholdSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Loop timing, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    /// Wait before re-sampling a button to tell tap from hold
    pub settle_ms: u32,
    /// Pause between configuration screen redraws
    pub refresh_ms: u32,
    /// Spacing of alarm confirmation samples
    pub confirm_interval_ms: u32,
    /// Indicator blink period while an alarm is sustained
    pub blink_interval_ms: u32,
    /// Pause at the end of every monitor cycle
    pub poll_interval_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_ms: 1000,
            refresh_ms: 200,
            confirm_interval_ms: 200,
            blink_interval_ms: 300,
            poll_interval_ms: 1000,
        }
    }
}

impl Timing {
    fn all(&self) -> [u32; 5] {
        [
            self.settle_ms,
            self.refresh_ms,
            self.confirm_interval_ms,
            self.blink_interval_ms,
            self.poll_interval_ms,
        ]
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Alarm limits the device boots with
    pub thresholds: ThresholdSet,
    /// Loop timing
    pub timing: Timing,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Threshold limits break an ordering or range rule
    Thresholds(ThresholdError),
    /// A timing value is zero
    ZeroInterval,
}

impl From<ThresholdError> for ConfigError {
    fn from(e: ThresholdError) -> Self {
        ConfigError::Thresholds(e)
    }
}

impl DeviceConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;

        if self.timing.all().contains(&0) {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}
