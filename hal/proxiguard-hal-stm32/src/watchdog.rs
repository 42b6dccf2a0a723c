//! Independent watchdog (IWDG)
//!
//! The IWDG runs from the LSI clock and cannot be stopped once unleashed.
//! The peripheral is held until `arm` so the timeout can come from config.

use embassy_stm32::wdg::{IndependentWatchdog, Instance};
use embassy_stm32::Peri;
use proxiguard_hal::Watchdog;

/// IWDG behind the `Watchdog` trait
pub struct IwdgWatchdog<'d, T: Instance> {
    peripheral: Option<Peri<'d, T>>,
    running: Option<IndependentWatchdog<'d, T>>,
}

impl<'d, T: Instance> IwdgWatchdog<'d, T> {
    pub fn new(peripheral: Peri<'d, T>) -> Self {
        Self {
            peripheral: Some(peripheral),
            running: None,
        }
    }
}

impl<T: Instance> Watchdog for IwdgWatchdog<'_, T> {
    fn arm(&mut self, timeout_us: u32) {
        // Second arm is ignored: the peripheral is already consumed
        if let Some(peripheral) = self.peripheral.take() {
            let mut wdg = IndependentWatchdog::new(peripheral, timeout_us);
            wdg.unleash();
            self.running = Some(wdg);
        }
    }

    fn feed(&mut self) {
        if let Some(wdg) = self.running.as_mut() {
            wdg.pet();
        }
    }

    fn is_armed(&self) -> bool {
        self.running.is_some()
    }
}
