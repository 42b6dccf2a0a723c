//! Watchdog abstraction
//!
//! A watchdog resets the device unless it is fed within its timeout. Real
//! implementations cannot be disarmed once started.

/// Hardware liveness timer
pub trait Watchdog {
    /// Start the countdown with the given timeout in microseconds
    ///
    /// Hardware watchdogs accept this once per boot. Callers are expected to
    /// guard against re-arming (see `WatchdogSupervisor` in proxiguard-core).
    fn arm(&mut self, timeout_us: u32);

    /// Restart the countdown from zero
    fn feed(&mut self);

    /// Check if the countdown is running
    fn is_armed(&self) -> bool;
}
