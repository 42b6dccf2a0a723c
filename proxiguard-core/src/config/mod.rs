//! Configuration types
//!
//! Timing, watchdog and buzzer settings shared by the core and the firmware.

pub mod types;

pub use types::*;
