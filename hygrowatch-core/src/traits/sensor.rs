//! Humidity/temperature sensor trait

/// One measurement from the sensor
///
/// Whole units only: the sensor's fractional bytes are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Temperature in degrees Celsius (0-99)
    pub temperature: u8,
    /// False until the first successful poll
    pub valid: bool,
}

impl SensorReading {
    /// Create a valid reading
    pub fn new(humidity: u8, temperature: u8) -> Self {
        Self {
            humidity,
            temperature,
            valid: true,
        }
    }
}

/// Errors that can occur while polling the sensor
///
/// All of them are transient: the caller keeps its previous reading and
/// tries again on the next poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor never acknowledged the start signal
    NoResponse,
    /// Line stopped toggling in the middle of the data frame
    Timeout,
    /// Frame received but the checksum byte does not match
    ChecksumMismatch,
}

/// Trait for combined humidity/temperature sensors
pub trait HumiditySensor {
    /// Run one complete measurement transaction
    ///
    /// Blocks for the duration of the transaction (about 25 ms for DHT11).
    fn poll(&mut self) -> Result<SensorReading, SensorError>;
}

impl<T: HumiditySensor + ?Sized> HumiditySensor for &mut T {
    fn poll(&mut self) -> Result<SensorReading, SensorError> {
        (**self).poll()
    }
}
