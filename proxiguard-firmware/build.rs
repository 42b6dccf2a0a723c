//! Build script for proxiguard-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates system.toml at compile time
//! - Generates the `SYSTEM_CONFIG` constant from it

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use proxiguard_core::config::{
    BuzzerConfig, ConfigError, IdleConfig, ProximityTiming, SystemConfig, WatchdogConfig,
    WATCHDOG_MAX_TIMEOUT_US, WATCHDOG_MIN_TIMEOUT_US,
};
use serde::de::DeserializeOwned;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Linker scripts for the cortex-m-rt runtime and defmt
fn setup_linker() {
    // memory.x comes from embassy-stm32's `memory-x` feature
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate system.toml configuration at compile time
fn validate_config() -> SystemConfig {
    println!("cargo:rerun-if-changed=system.toml");

    let config_path = Path::new("system.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: system.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a system.toml configuration file.         ║\n\
            ║  Please create one in the proxiguard-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read system.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in system.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_required_sections(&config);

    let mut errors = Vec::new();

    let system = SystemConfig {
        watchdog: read_section::<WatchdogConfig>(&config, "watchdog", &mut errors),
        proximity: read_section::<ProximityTiming>(&config, "proximity", &mut errors),
        buzzer: read_section::<BuzzerConfig>(&config, "buzzer", &mut errors),
        idle: read_section::<IdleConfig>(&config, "idle", &mut errors),
    };

    if !errors.is_empty() {
        panic!("{}", boxed_errors("Invalid system configuration", &errors));
    }

    if let Err(e) = system.validate() {
        panic!(
            "{}",
            boxed_errors("Invalid system configuration", &[describe_config_error(e)])
        );
    }

    // A detection holds the dispatcher for longer than the watchdog window
    if system.settle_exceeds_watchdog() {
        println!(
            "cargo:warning=presence settle ({} us) exceeds the watchdog timeout ({} us): \
             a detection resets the board unless the object leaves first",
            system.proximity.presence_hold_us(),
            system.watchdog.timeout_us
        );
    }

    println!("cargo:warning=system.toml validated successfully");
    system
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

/// Box a list of validation errors under a title
fn boxed_errors<S: AsRef<str>>(title: &str, errors: &[S]) -> String {
    format!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let mut errors = Vec::new();

    for section in ["watchdog", "proximity", "buzzer", "idle"] {
        match config.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => errors.push(format!("[{}] must be a table", section)),
            None => errors.push(format!("Missing [{}] section", section)),
        }
    }

    if !errors.is_empty() {
        panic!(
            "{}",
            boxed_errors("Missing required sections in system.toml", &errors)
        );
    }
}

/// Deserialize one section; missing keys keep their reference values
fn read_section<T: DeserializeOwned + Default>(
    config: &toml::Value,
    section: &str,
    errors: &mut Vec<String>,
) -> T {
    let Some(value) = config.get(section) else {
        return T::default();
    };

    match value.clone().try_into::<T>() {
        Ok(parsed) => parsed,
        Err(e) => {
            errors.push(format!("[{}] {}", section, e.message()));
            T::default()
        }
    }
}

/// Human-readable form of a range check failure
fn describe_config_error(error: ConfigError) -> String {
    match error {
        ConfigError::ZeroWatchdogTimeout => "[watchdog] timeout_us must be non-zero".to_string(),
        ConfigError::WatchdogTimeoutOutOfRange(us) => format!(
            "[watchdog] timeout_us {} outside {}-{}",
            us, WATCHDOG_MIN_TIMEOUT_US, WATCHDOG_MAX_TIMEOUT_US
        ),
        ConfigError::ZeroIdleInterval => "[idle] interval_ms must be non-zero".to_string(),
        ConfigError::ZeroBuzzerFrequency => "[buzzer] frequency_hz must be non-zero".to_string(),
        ConfigError::DutyOutOfRange(duty) => {
            format!("[buzzer] duty_percent {} must be 0-100", duty)
        }
    }
}

/// Write `$OUT_DIR/system_config.rs`
fn generate_config(config: &SystemConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let source = format!(
        "/// Configuration compiled from system.toml\n\
         pub const SYSTEM_CONFIG: SystemConfig = SystemConfig {{\n    \
             watchdog: WatchdogConfig {{ timeout_us: {} }},\n    \
             proximity: ProximityTiming {{\n        \
                 settle_sleep_ms: {},\n        \
                 settle_busy_wait_us: {},\n        \
                 clear_busy_wait_us: {},\n    \
             }},\n    \
             buzzer: BuzzerConfig {{\n        \
                 precedence: Precedence::{:?},\n        \
                 frequency_hz: {},\n        \
                 duty_percent: {},\n    \
             }},\n    \
             idle: IdleConfig {{ interval_ms: {} }},\n\
         }};\n",
        config.watchdog.timeout_us,
        config.proximity.settle_sleep_ms,
        config.proximity.settle_busy_wait_us,
        config.proximity.clear_busy_wait_us,
        config.buzzer.precedence,
        config.buzzer.frequency_hz,
        config.buzzer.duty_percent,
        config.idle.interval_ms,
    );

    if let Err(e) = fs::write(out_dir.join("system_config.rs"), source) {
        panic!("{}", boxed_errors("Failed to write system_config.rs", &[e.to_string()]));
    }
}
