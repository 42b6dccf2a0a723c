//! GPIO buzzer output
//!
//! Active buzzer switched by a GPIO pin, directly or through a transistor.

use proxiguard_core::traits::BuzzerOutput;
use proxiguard_hal::OutputPin;

/// GPIO-switched buzzer
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioBuzzer<P> {
    pin: P,
    /// If true, buzzer ON = pin LOW
    inverted: bool,
    /// Current logical state (true = sounding)
    active: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a new GPIO buzzer
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, buzzer sounds when pin is LOW (PNP drivers)
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut buzzer = Self {
            pin,
            inverted,
            active: false,
        };
        buzzer.deactivate();
        buzzer
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    fn drive(&mut self, active: bool) {
        self.active = active;
        self.pin.set_state(active != self.inverted);
    }
}

impl<P: OutputPin> BuzzerOutput for GpioBuzzer<P> {
    fn activate(&mut self) {
        self.drive(true);
    }

    fn deactivate(&mut self) {
        self.drive(false);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
