//! Configuration types and threshold rules

mod thresholds;
mod types;

pub use thresholds::{
    Bound, Quantity, ThresholdError, ThresholdSet, HUMIDITY_MAX, HUMIDITY_MIN, HUMIDITY_STEP,
    TEMPERATURE_MAX, TEMPERATURE_MIN, TEMPERATURE_STEP,
};
pub use types::{ConfigError, DeviceConfig, Timing};
