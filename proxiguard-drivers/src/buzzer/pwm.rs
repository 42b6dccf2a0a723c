//! PWM buzzer output
//!
//! Passive piezo driven from a timer channel. The carrier frequency is set
//! when the timer is configured; this driver only switches the duty cycle
//! between the configured level and fully off ("suspend" / "resume").
//!
//! ```ignore
//! let ch1 = SimplePwm::new(p.TIM1, Some(pin), None, None, None, hz(2000), Default::default())
//!     .split()
//!     .ch1;
//! let mut buzzer = PwmBuzzer::new(ch1, 50);
//! buzzer.activate();
//! ```

use embedded_hal::pwm::SetDutyCycle;
use proxiguard_core::traits::BuzzerOutput;

/// PWM-driven buzzer
pub struct PwmBuzzer<P> {
    channel: P,
    /// Duty cycle while sounding (0-100%)
    duty_percent: u8,
    active: bool,
    /// Set when the PWM channel rejected a duty update
    fault: bool,
}

impl<P: SetDutyCycle> PwmBuzzer<P> {
    /// Create a new PWM buzzer, silenced
    ///
    /// `duty_percent` above 100 is clamped.
    pub fn new(channel: P, duty_percent: u8) -> Self {
        let mut buzzer = Self {
            channel,
            duty_percent: duty_percent.min(100),
            active: false,
            fault: false,
        };
        buzzer.deactivate();
        buzzer
    }

    /// Duty cycle used while sounding
    pub fn duty_percent(&self) -> u8 {
        self.duty_percent
    }

    /// Check if any duty update has failed
    pub fn has_fault(&self) -> bool {
        self.fault
    }

    /// Get access to the underlying channel
    pub fn channel(&self) -> &P {
        &self.channel
    }
}

impl<P: SetDutyCycle> BuzzerOutput for PwmBuzzer<P> {
    fn activate(&mut self) {
        if self
            .channel
            .set_duty_cycle_percent(self.duty_percent)
            .is_err()
        {
            self.fault = true;
        }
        self.active = true;
    }

    fn deactivate(&mut self) {
        if self.channel.set_duty_cycle_fully_off().is_err() {
            self.fault = true;
        }
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
