//! Watchdog supervision
//!
//! The supervisor guards the hardware watchdog; the liveness monitor is a
//! host-side watchdog whose expiry runs an injected reset callback.

pub mod monitor;
pub mod supervisor;

pub use monitor::{LivenessMonitor, LivenessStatus};
pub use supervisor::{SupervisorError, WatchdogSupervisor};
