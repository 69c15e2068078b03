//! Test doubles shared by the unit tests

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;

use crate::config::DeviceConfig;
use crate::device::{Device, Indicators};
use crate::input::{Button, ButtonBank};
use crate::traits::{CharDisplay, DisplayError, HumiditySensor, Indicator, SensorError, SensorReading};

/// Virtual time after which a test is considered stuck
const RUNAWAY_MS: u64 = 60 * 60 * 1000;

#[derive(Debug, Clone, Copy)]
enum Action {
    Press(Button),
    Release(Button),
}

/// Virtual clock that replays scripted button edges as time passes
pub struct MockClock<'a> {
    bank: &'a ButtonBank,
    now_ns: u64,
    script: Vec<(u64, Action)>,
}

impl<'a> MockClock<'a> {
    pub fn new(bank: &'a ButtonBank) -> Self {
        Self {
            bank,
            now_ns: 0,
            script: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }

    pub fn press_at(&mut self, at_ms: u64, button: Button) {
        self.schedule(at_ms, Action::Press(button));
    }

    pub fn release_at(&mut self, at_ms: u64, button: Button) {
        self.schedule(at_ms, Action::Release(button));
    }

    /// Press and release within a few milliseconds
    pub fn tap_at(&mut self, at_ms: u64, button: Button) {
        self.press_at(at_ms, button);
        self.release_at(at_ms + 5, button);
    }

    /// Press and keep down past a 1 s settle
    pub fn hold_at(&mut self, at_ms: u64, button: Button) {
        self.press_at(at_ms, button);
        self.release_at(at_ms + 1500, button);
    }

    fn schedule(&mut self, at_ms: u64, action: Action) {
        self.script.push((at_ms * 1_000_000, action));
        self.script.sort_by_key(|(at, _)| *at);
        self.apply_due();
    }

    fn apply_due(&mut self) {
        while let Some(&(at, action)) = self.script.first() {
            if at > self.now_ns {
                break;
            }
            self.script.remove(0);
            match action {
                Action::Press(button) => self.bank.on_edge(button, true),
                Action::Release(button) => self.bank.on_edge(button, false),
            }
        }
    }
}

impl DelayNs for MockClock<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ns += u64::from(ns);
        assert!(self.now_ms() < RUNAWAY_MS, "virtual clock ran away");
        self.apply_due();
    }
}

/// Sensor that replays queued results, then repeats the last one
pub struct QueueSensor {
    queue: VecDeque<Result<SensorReading, SensorError>>,
    last: Result<SensorReading, SensorError>,
    pub polls: u32,
}

impl QueueSensor {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            last: Err(SensorError::NoResponse),
            polls: 0,
        }
    }

    pub fn steady(humidity: u8, temperature: u8) -> Self {
        let mut sensor = Self::new();
        sensor.last = Ok(SensorReading::new(humidity, temperature));
        sensor
    }

    pub fn push(&mut self, humidity: u8, temperature: u8) -> &mut Self {
        self.queue
            .push_back(Ok(SensorReading::new(humidity, temperature)));
        self
    }

    pub fn push_err(&mut self, error: SensorError) -> &mut Self {
        self.queue.push_back(Err(error));
        self
    }
}

impl HumiditySensor for QueueSensor {
    fn poll(&mut self) -> Result<SensorReading, SensorError> {
        self.polls += 1;
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}

/// Display that keeps the visible grid plus every text write
pub struct RecordingDisplay {
    grid: [[u8; 16]; 2],
    cursor: (usize, usize),
    pub writes: Vec<String>,
    pub clears: u32,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            grid: [[b' '; 16]; 2],
            cursor: (0, 0),
            writes: Vec::new(),
            clears: 0,
        }
    }

    /// Visible text of a 1-based row, trailing blanks trimmed
    pub fn line(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.grid[row - 1])
            .trim_end()
            .to_string()
    }

    pub fn wrote(&self, text: &str) -> bool {
        self.writes.iter().any(|w| w == text)
    }
}

impl CharDisplay for RecordingDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.grid = [[b' '; 16]; 2];
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        crate::traits::display::check_position(col, row)?;
        self.cursor = (usize::from(col) - 1, usize::from(row) - 1);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let (mut col, row) = self.cursor;
        for byte in text.bytes() {
            if col < 16 {
                self.grid[row][col] = byte;
            }
            col += 1;
        }
        self.cursor = (col, row);
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockLed {
    on: bool,
    pub toggles: u32,
}

impl Indicator for MockLed {
    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn toggle(&mut self) {
        self.toggles += 1;
        self.on = !self.on;
    }
}

pub type MockDevice<'a> = Device<'a, QueueSensor, RecordingDisplay, MockClock<'a>, MockLed>;

pub fn mock_device(bank: &ButtonBank, sensor: QueueSensor) -> MockDevice<'_> {
    Device::new(
        sensor,
        RecordingDisplay::new(),
        MockClock::new(bank),
        Indicators::default(),
        bank,
        DeviceConfig::default(),
    )
}
