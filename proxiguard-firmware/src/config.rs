//! Compiled-in system configuration
//!
//! Generated by build.rs from `system.toml`.

use proxiguard_core::buzzer::Precedence;
use proxiguard_core::config::{BuzzerConfig, IdleConfig, ProximityTiming, SystemConfig, WatchdogConfig};

include!(concat!(env!("OUT_DIR"), "/system_config.rs"));
