//! Manual trigger handler
//!
//! Each button press flips the latch. The indicator mirrors the latch, and
//! the buzzer is requested on or off with it.

use proxiguard_hal::OutputPin;

use super::Notice;
use crate::buzzer::{BuzzerArbiter, BuzzerSource};
use crate::state::ToggleLatch;
use crate::traits::BuzzerOutput;

/// Handler for trigger button presses
pub struct ManualTriggerHandler<I> {
    latch: ToggleLatch,
    indicator: I,
}

impl<I: OutputPin> ManualTriggerHandler<I> {
    /// Take the indicator pin and drive it low
    pub fn new(indicator: I) -> Self {
        let mut handler = Self {
            latch: ToggleLatch::new(),
            indicator,
        };
        handler.indicator.set_low();
        handler
    }

    /// Handle one trigger press
    pub fn handle<B: BuzzerOutput>(&mut self, arbiter: &mut BuzzerArbiter<B>) -> Notice {
        let on = self.latch.flip();
        self.indicator.set_state(on);
        arbiter.request(BuzzerSource::Manual, on);

        if on {
            info!("manual trigger on");
            Notice::TriggerOn
        } else {
            info!("manual trigger off");
            Notice::TriggerOff
        }
    }

    /// Current latch
    pub fn latch(&self) -> ToggleLatch {
        self.latch
    }

    /// Get access to the indicator pin
    pub fn indicator(&self) -> &I {
        &self.indicator
    }
}
