//! Build script for hygrowatch-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time
//! - Generates the boot configuration from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use hygrowatch_core::config::{ConfigError, DeviceConfig, ThresholdError};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    #[cfg(feature = "defmt")]
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate device.toml
fn load_config() -> DeviceConfig {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a device.toml configuration file.         ║\n\
            ║  Please create one in the hygrowatch-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: DeviceConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid device.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml failed validation                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&describe(e))
        );
    }

    println!("cargo:warning=device.toml validated successfully");
    config
}

/// Human-readable explanation of a validation error
fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::Thresholds(ThresholdError::Inverted(quantity)) => format!(
            "[thresholds] {:?} low limit is above its high limit",
            quantity
        ),
        ConfigError::Thresholds(ThresholdError::OutOfRange(quantity)) => format!(
            "[thresholds] {:?} limit out of range\n\
             temperature: 0..=50, humidity: 10..=90",
            quantity
        ),
        ConfigError::Thresholds(ThresholdError::OffStep) => {
            "[thresholds] humidity limits must be multiples of 10".to_string()
        }
        ConfigError::ZeroInterval => "[timing] every interval must be non-zero".to_string(),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the validated configuration as a Rust constant
fn generate_config(config: &DeviceConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let t = &config.thresholds;
    let timing = &config.timing;

    let source = format!(
        "/// Configuration from device.toml\n\
         pub const DEVICE_CONFIG: DeviceConfig = DeviceConfig {{\n    \
             thresholds: ThresholdSet {{\n        \
                 temp_high: {},\n        \
                 temp_low: {},\n        \
                 hum_high: {},\n        \
                 hum_low: {},\n    \
             }},\n    \
             timing: Timing {{\n        \
                 settle_ms: {},\n        \
                 refresh_ms: {},\n        \
                 confirm_interval_ms: {},\n        \
                 blink_interval_ms: {},\n        \
                 poll_interval_ms: {},\n    \
             }},\n\
         }};\n",
        t.temp_high,
        t.temp_low,
        t.hum_high,
        t.hum_low,
        timing.settle_ms,
        timing.refresh_ms,
        timing.confirm_interval_ms,
        timing.blink_interval_ms,
        timing.poll_interval_ms,
    );

    fs::write(out_dir.join("device_config.rs"), source).unwrap();
}
