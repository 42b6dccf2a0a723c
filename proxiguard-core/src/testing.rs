//! Simulated peripherals shared by the unit tests

use proxiguard_hal::{OutputPin, Watchdog};

use crate::traits::BuzzerOutput;

/// Mock buzzer
#[derive(Default)]
pub(crate) struct MockBuzzer {
    pub active: bool,
}

impl BuzzerOutput for MockBuzzer {
    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Mock GPIO output
#[derive(Default)]
pub(crate) struct MockPin {
    pub high: bool,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn toggle(&mut self) {
        self.high = !self.high;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Mock watchdog that only counts
#[derive(Default)]
pub(crate) struct MockWatchdog {
    pub timeout_us: Option<u32>,
    pub feeds: u32,
}

impl Watchdog for MockWatchdog {
    fn arm(&mut self, timeout_us: u32) {
        self.timeout_us = Some(timeout_us);
    }

    fn feed(&mut self) {
        self.feeds += 1;
    }

    fn is_armed(&self) -> bool {
        self.timeout_us.is_some()
    }
}

/// Zero-time delay that records what it was asked for
#[derive(Default)]
pub(crate) struct RecordingDelay {
    /// Total yielding sleep (ms)
    pub slept_ms: u32,
    /// Total busy-wait (µs)
    pub busy_us: u32,
    pub sleeps: u32,
    pub busy_waits: u32,
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.busy_us += ns / 1_000;
        self.busy_waits += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.busy_us += us;
        self.busy_waits += 1;
    }
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.slept_ms += ns / 1_000_000;
        self.sleeps += 1;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.slept_ms += ms;
        self.sleeps += 1;
    }
}
