//! Buzzer output trait

/// Two-state audible output
///
/// Implementations drive a piezo through PWM or switch an active buzzer
/// through a GPIO. "Suspended" is the silent state; a buzzer must come up
/// suspended.
pub trait BuzzerOutput {
    /// Start sounding
    fn activate(&mut self);

    /// Stop sounding
    fn deactivate(&mut self);

    /// Check if the buzzer is currently sounding
    fn is_active(&self) -> bool;

    /// Drive the buzzer to the given state
    fn set_active(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }
}
