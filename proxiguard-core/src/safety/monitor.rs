//! Liveness monitor
//!
//! Host-side stand-in for the hardware watchdog. Time is advanced explicitly
//! and expiry runs an injected callback instead of rebooting the chip.

use proxiguard_hal::Watchdog;

/// Result of advancing the monitor clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LivenessStatus {
    /// Not armed yet; time does not count
    Disarmed,
    /// Countdown running
    Alive {
        /// Time left before expiry
        remaining_us: u32,
    },
    /// Countdown reached the timeout; reset callback ran
    Expired,
}

/// Simulated watchdog with an injectable reset action
///
/// The callback models the device reboot. After it runs the countdown starts
/// over, as a rebooted device would re-arm during boot.
pub struct LivenessMonitor<R> {
    /// Armed timeout, `None` until armed
    timeout_us: Option<u32>,
    /// Time since the last feed (or arm)
    elapsed_us: u32,
    /// Resets triggered so far
    resets: u32,
    /// Feeds received so far
    feeds: u32,
    /// Reset action
    on_expiry: R,
}

impl<R: FnMut()> LivenessMonitor<R> {
    /// Create a disarmed monitor
    pub fn new(on_expiry: R) -> Self {
        Self {
            timeout_us: None,
            elapsed_us: 0,
            resets: 0,
            feeds: 0,
            on_expiry,
        }
    }

    /// Advance time
    ///
    /// # Arguments
    /// - `delta_us`: Time elapsed since the last call
    ///
    /// At most one reset fires per call.
    pub fn advance(&mut self, delta_us: u32) -> LivenessStatus {
        let Some(timeout_us) = self.timeout_us else {
            return LivenessStatus::Disarmed;
        };

        self.elapsed_us = self.elapsed_us.saturating_add(delta_us);

        if self.elapsed_us >= timeout_us {
            warn!("liveness timeout after {}us, resetting", self.elapsed_us);
            (self.on_expiry)();
            self.resets = self.resets.saturating_add(1);
            self.elapsed_us = 0;
            return LivenessStatus::Expired;
        }

        LivenessStatus::Alive {
            remaining_us: timeout_us - self.elapsed_us,
        }
    }

    /// Current status without advancing time
    pub fn status(&self) -> LivenessStatus {
        match self.timeout_us {
            None => LivenessStatus::Disarmed,
            Some(timeout_us) => LivenessStatus::Alive {
                remaining_us: timeout_us.saturating_sub(self.elapsed_us),
            },
        }
    }

    /// Number of resets triggered
    pub fn reset_count(&self) -> u32 {
        self.resets
    }

    /// Number of feeds received
    pub fn feed_count(&self) -> u32 {
        self.feeds
    }
}

impl<R: FnMut()> Watchdog for LivenessMonitor<R> {
    fn arm(&mut self, timeout_us: u32) {
        self.timeout_us = Some(timeout_us);
        self.elapsed_us = 0;
    }

    fn feed(&mut self) {
        self.elapsed_us = 0;
        self.feeds = self.feeds.saturating_add(1);
    }

    fn is_armed(&self) -> bool {
        self.timeout_us.is_some()
    }
}
