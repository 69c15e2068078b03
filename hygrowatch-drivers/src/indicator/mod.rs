//! Status indicators

mod led;

pub use led::GpioLed;
