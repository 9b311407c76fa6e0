//! Build script for segchain-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and generates `board_config.rs` from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use segchain_core::config::{ConfigError, PinAssignment, Timing};
use serde::Deserialize;

/// User GPIOs on the RP2040
const GPIO_COUNT: u8 = 30;

/// Pin keys in bring-up order
const PIN_KEYS: [&str; 4] = ["data", "clock", "transfer", "pwm_clock"];

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

    // Linker scripts from cortex-m-rt, embassy-rp and defmt
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// board.toml layout
///
/// `[pins]` and `[timing]` deserialize straight into the core config types.
#[derive(Deserialize)]
struct BoardFile {
    pins: PinAssignment,
    timing: Timing,
    chain: ChainSection,
    display: DisplaySection,
}

#[derive(Deserialize)]
struct ChainSection {
    pwm_magnitude: u16,
}

#[derive(Deserialize)]
struct DisplaySection {
    cycle: String,
}

/// Read and validate board.toml
fn load_config() -> BoardFile {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml describing the bus pins,     ║\n\
            ║  timing and display cycle. Create one in segchain-firmware.      ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax errors, missing keys and out-of-range integers all surface here
    let config: BoardFile = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_pins(&config.pins, &mut errors);
    validate_timing(&config.timing, &mut errors);
    if config.display.cycle.is_empty() {
        errors.push("[display] cycle cannot be empty".to_string());
    }
    report("Invalid board configuration", &errors);

    println!("cargo:warning=board.toml validated successfully");
    config
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

/// Panic with all collected errors, if any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate the bus pin assignment against the RP2040
fn validate_pins(pins: &PinAssignment, errors: &mut Vec<String>) {
    match pins.validate(GPIO_COUNT) {
        Ok(()) => {}
        Err(ConfigError::InvalidPin(pin)) => errors.push(format!(
            "[pins] gpio{} does not exist (0-{})",
            pin,
            GPIO_COUNT - 1
        )),
        Err(ConfigError::DuplicatePin(pin)) => {
            let users: Vec<&str> = PIN_KEYS
                .iter()
                .zip(pins.as_array())
                .filter(|(_, p)| *p == pin)
                .map(|(key, _)| *key)
                .collect();
            errors.push(format!("[pins] {} share gpio{}", users.join(" and "), pin));
        }
    }
}

/// Check a timing value against its allowed range
fn check_range(key: &str, value: u32, max: u32, errors: &mut Vec<String>) {
    if value > max {
        errors.push(format!("[timing] {} must be 0-{}", key, max));
    }
}

/// Validate timing values
fn validate_timing(timing: &Timing, errors: &mut Vec<String>) {
    check_range("bit_hold_ms", timing.bit_hold_ms, 1000, errors);
    check_range("frame_unit_ms", timing.frame_unit_ms, 1000, errors);
    check_range("display_hold_ms", timing.display_hold_ms, 60_000, errors);
}

/// Write `board_config.rs` into OUT_DIR
fn generate_config(config: &BoardFile) {
    let mut out = String::new();
    out.push_str("// Generated by build.rs from board.toml. Do not edit.\n\n");

    for (key, pin) in PIN_KEYS.iter().zip(config.pins.as_array()) {
        out.push_str(&format!(
            "pub const PIN_{}: u8 = {};\n",
            key.to_uppercase(),
            pin
        ));
    }

    let timing = &config.timing;
    for (key, value) in [
        ("BIT_HOLD_MS", timing.bit_hold_ms),
        ("FRAME_UNIT_MS", timing.frame_unit_ms),
        ("DISPLAY_HOLD_MS", timing.display_hold_ms),
        ("PWM_PULSES", timing.pwm_pulses),
    ] {
        out.push_str(&format!("pub const {}: u32 = {};\n", key, value));
    }

    out.push_str(&format!(
        "pub const PWM_MAGNITUDE: u16 = {:#06x};\n",
        config.chain.pwm_magnitude
    ));
    out.push_str(&format!(
        "pub const DISPLAY_CYCLE: &str = {:?};\n",
        config.display.cycle
    ));

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("board_config.rs"), out).unwrap();
}
