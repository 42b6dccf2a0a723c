//! Component traits
//!
//! These traits define the interface between the control policy and the
//! concrete drivers that sit on top of the chip HAL.

pub mod buzzer;
pub mod delay;

pub use buzzer::BuzzerOutput;
pub use delay::SettleDelay;
