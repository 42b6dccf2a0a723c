//! Watchdog supervisor
//!
//! Owns the watchdog for the whole program. Started once at boot, kicked by
//! the proximity handler whenever the sensor reports clear.

use proxiguard_hal::Watchdog;

/// Errors reported by the supervisor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupervisorError {
    /// `start` called on an already running watchdog
    AlreadyArmed,
    /// `kick` called before `start`
    NotArmed,
    /// Timeout of zero would reset immediately
    InvalidTimeout,
}

/// Watchdog supervisor
///
/// Tracks the armed timeout and counts kicks so health can be asserted in
/// tests and logged on target.
#[derive(Debug)]
pub struct WatchdogSupervisor<W> {
    watchdog: W,
    /// Armed timeout, `None` until `start`
    timeout_us: Option<u32>,
    /// Kicks delivered since boot
    kicks: u32,
}

impl<W: Watchdog> WatchdogSupervisor<W> {
    /// Wrap a watchdog that has not been armed yet
    pub fn new(watchdog: W) -> Self {
        Self {
            watchdog,
            timeout_us: None,
            kicks: 0,
        }
    }

    /// Arm the watchdog with the given timeout
    ///
    /// Hardware watchdogs cannot be reconfigured once running, so a second
    /// call is rejected rather than forwarded.
    pub fn start(&mut self, timeout_us: u32) -> Result<(), SupervisorError> {
        if self.timeout_us.is_some() {
            return Err(SupervisorError::AlreadyArmed);
        }
        if timeout_us == 0 {
            return Err(SupervisorError::InvalidTimeout);
        }

        self.watchdog.arm(timeout_us);
        self.timeout_us = Some(timeout_us);
        info!("watchdog armed: timeout={}us", timeout_us);
        Ok(())
    }

    /// Restart the watchdog countdown
    pub fn kick(&mut self) -> Result<(), SupervisorError> {
        if self.timeout_us.is_none() {
            return Err(SupervisorError::NotArmed);
        }

        self.watchdog.feed();
        self.kicks = self.kicks.wrapping_add(1);
        trace!("watchdog kicked ({})", self.kicks);
        Ok(())
    }

    /// Check if `start` has succeeded
    pub fn is_armed(&self) -> bool {
        self.timeout_us.is_some()
    }

    /// Armed timeout in microseconds
    pub fn timeout_us(&self) -> Option<u32> {
        self.timeout_us
    }

    /// Number of kicks since boot
    pub fn kick_count(&self) -> u32 {
        self.kicks
    }

    /// Get access to the underlying watchdog
    pub fn watchdog(&self) -> &W {
        &self.watchdog
    }

    /// Get mutable access to the underlying watchdog
    ///
    /// Simulated watchdogs need this to advance time.
    pub fn watchdog_mut(&mut self) -> &mut W {
        &mut self.watchdog
    }
}
