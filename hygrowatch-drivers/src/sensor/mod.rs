//! Humidity/temperature sensor drivers

mod dht11;

pub use dht11::{decode_frame, Dht11, FRAME_BYTES};
