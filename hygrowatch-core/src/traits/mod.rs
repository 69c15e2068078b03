//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod indicator;
pub mod sensor;

pub use display::{CharDisplay, DisplayError, DisplayExt, COLUMNS, ROWS};
pub use indicator::Indicator;
pub use sensor::{HumiditySensor, SensorError, SensorReading};
