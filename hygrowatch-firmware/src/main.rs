//! Hygrowatch - Temperature/Humidity Alarm Firmware
//!
//! Main firmware binary for RP2040-based boards. The control loop is
//! blocking and runs in thread mode; the four button handlers are async
//! tasks on an interrupt executor so they preempt it.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use hygrowatch_core::alarm::{AlarmOutcome, CONFIRM_SAMPLES};
use hygrowatch_core::device::{Device, Indicators};
use hygrowatch_core::input::Button;
use hygrowatch_core::monitor::{CycleReport, Monitor};
use hygrowatch_core::render;
use hygrowatch_drivers::display::Hd44780;
use hygrowatch_drivers::indicator::GpioLed;
use hygrowatch_drivers::sensor::Dht11;
use hygrowatch_hal_rp2040::gpio::{button_input, RpFlex, RpOutput};
use hygrowatch_hal_rp2040::pins::BoardPins;

mod config;
mod tasks;

/// DHT11 needs this long after power-up before the first transaction
const SENSOR_WARMUP_MS: u32 = 1000;

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Hygrowatch firmware starting...");

    let p = embassy_rp::init(Default::default());
    let pins = BoardPins::take(p);
    let config = config::boot_config();

    // Button tasks
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    let buttons = pins.buttons;
    spawner
        .spawn(tasks::button_task(button_input(buttons.increase), Button::Increase))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_input(buttons.decrease), Button::Decrease))
        .unwrap();
    spawner
        .spawn(tasks::button_task(
            button_input(buttons.toggle_quantity),
            Button::ToggleQuantity,
        ))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_input(buttons.confirm), Button::Confirm))
        .unwrap();
    info!("Button tasks spawned");

    let lcd = Hd44780::new(
        RpOutput::new(pins.lcd.rs),
        RpOutput::new(pins.lcd.en),
        pins.lcd.data.map(RpOutput::new),
        Delay,
    );
    info!("LCD initialized");

    let leds = Indicators::new(
        GpioLed::new_active_high(RpOutput::new(pins.leds.normal)),
        GpioLed::new_active_high(RpOutput::new(pins.leds.temperature)),
        GpioLed::new_active_high(RpOutput::new(pins.leds.humidity)),
    );

    let dht = Dht11::new(RpFlex::new(pins.sensor), Delay);

    let mut device = Device::new(dht, lcd, Delay, leds, &tasks::BUTTONS, config);
    device.show(&render::boot_screen());
    device.pause_ms(SENSOR_WARMUP_MS);

    info!(
        "Monitoring: temp {}..={} C, humidity {}..={} %",
        config.thresholds.temp_low,
        config.thresholds.temp_high,
        config.thresholds.hum_low,
        config.thresholds.hum_high
    );

    let mut monitor = Monitor::new(device);
    loop {
        let report = monitor.run_cycle();
        log_report(&report);
    }
}

fn log_report(report: &CycleReport) {
    match report.reading {
        Ok(reading) => debug!("Reading: {} C, {} %", reading.temperature, reading.humidity),
        Err(e) => warn!("Sensor poll failed: {}", e),
    }

    if let Some(thresholds) = report.configured {
        info!("Configuration done: {}", thresholds);
    }

    let Some(alarms) = report.alarms else {
        return;
    };
    for (name, outcome) in [
        ("temperature", alarms.temperature),
        ("humidity", alarms.humidity),
    ] {
        match outcome {
            AlarmOutcome::Unconfirmed { out_of_range: 0 } => {}
            AlarmOutcome::Unconfirmed { out_of_range } => info!(
                "{} out of range in {}/{} samples, ignored as noise",
                name, out_of_range, CONFIRM_SAMPLES
            ),
            AlarmOutcome::Cleared { blink_cycles } => warn!(
                "{} alarm cleared after {} blink cycles",
                name, blink_cycles
            ),
        }
    }
}
