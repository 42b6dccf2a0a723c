//! Buzzer drivers

pub mod gpio;
pub mod pwm;

pub use gpio::GpioBuzzer;
pub use pwm::PwmBuzzer;
