//! DHT11 single-wire humidity/temperature sensor
//!
//! The host pulls the line low for 20 ms, releases it, and the sensor
//! answers with an 80 µs low / 80 µs high acknowledgement followed by 40
//! data bits. Every bit starts with a ~50 µs low phase; the length of the
//! following high phase carries the value (26-28 µs for `0`, ~70 µs for
//! `1`). Sampling 30 µs after the rising edge tells them apart.
//!
//! Frame layout (MSB first):
//!
//! | Byte | Content                      |
//! |------|------------------------------|
//! | 0    | Humidity, integer part       |
//! | 1    | Humidity, fraction (always 0)|
//! | 2    | Temperature, integer part    |
//! | 3    | Temperature, fraction        |
//! | 4    | Sum of bytes 0-3, mod 256    |

use embedded_hal::delay::DelayNs;
use hygrowatch_core::traits::{HumiditySensor, SensorError, SensorReading};
use hygrowatch_hal::{Direction, FlexPin, Level};

/// Start signal low time
const START_LOW_MS: u32 = 20;
/// High time after the start signal, before releasing the line
const START_HIGH_US: u32 = 20;
/// Delay from a bit's rising edge to the sample point
const SAMPLE_OFFSET_US: u32 = 30;
/// Longest any single line phase may last before giving up
///
/// The longest legal phase is the 80 µs acknowledgement.
const PHASE_TIMEOUT_US: u32 = 100;

/// Bytes per frame
pub const FRAME_BYTES: usize = 5;

/// Decode a raw frame
///
/// Accepts the frame iff the low byte of `b0 + b1 + b2 + b3` equals `b4`.
pub fn decode_frame(frame: [u8; FRAME_BYTES]) -> Result<SensorReading, SensorError> {
    let sum = frame[..4]
        .iter()
        .fold(0u8, |acc, byte| acc.wrapping_add(*byte));

    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    Ok(SensorReading::new(frame[0], frame[2]))
}

/// DHT11 on a direction-switching pin
///
/// The pin needs a pull-up (internal or external) so the released line
/// idles high.
pub struct Dht11<P, D> {
    pin: P,
    delay: D,
}

impl<P: FlexPin, D: DelayNs> Dht11<P, D> {
    /// Create a new driver and leave the line released
    pub fn new(mut pin: P, delay: D) -> Self {
        pin.set_direction(Direction::Input);
        Self { pin, delay }
    }

    /// Release the pin and delay source
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Busy-poll until the line leaves `level`
    fn wait_while(&mut self, level: Level, error: SensorError) -> Result<(), SensorError> {
        for _ in 0..PHASE_TIMEOUT_US {
            if self.pin.read() != level {
                return Ok(());
            }
            self.delay.delay_us(1);
        }
        Err(error)
    }

    fn pull_low(&mut self) {
        self.pin.set_direction(Direction::Output);
        self.pin.set_low();
        self.delay.delay_ms(START_LOW_MS);
    }

    fn release_line(&mut self) {
        self.pin.set_high();
        self.delay.delay_us(START_HIGH_US);
        self.pin.set_direction(Direction::Input);
    }

    fn acknowledge(&mut self) -> Result<(), SensorError> {
        self.wait_while(Level::High, SensorError::NoResponse)?;
        self.wait_while(Level::Low, SensorError::NoResponse)?;
        self.wait_while(Level::High, SensorError::NoResponse)
    }

    fn read_bit(&mut self) -> Result<bool, SensorError> {
        self.wait_while(Level::Low, SensorError::Timeout)?;
        self.delay.delay_us(SAMPLE_OFFSET_US);
        let bit = self.pin.is_high();
        self.wait_while(Level::High, SensorError::Timeout)?;
        Ok(bit)
    }

    fn read_frame(&mut self) -> Result<[u8; FRAME_BYTES], SensorError> {
        let mut frame = [0u8; FRAME_BYTES];
        for byte in frame.iter_mut() {
            for _ in 0..8 {
                *byte = (*byte << 1) | u8::from(self.read_bit()?);
            }
        }
        Ok(frame)
    }
}

impl<P: FlexPin, D: DelayNs> HumiditySensor for Dht11<P, D> {
    /// Run one transaction
    ///
    /// Interrupts are masked from the release of the start signal to the
    /// last data bit (about 5 ms). The 20 ms low phase before that runs
    /// with interrupts enabled.
    fn poll(&mut self) -> Result<SensorReading, SensorError> {
        self.pull_low();
        let frame = critical_section::with(|_| {
            self.release_line();
            self.acknowledge()?;
            self.read_frame()
        })?;
        decode_frame(frame)
    }
}
