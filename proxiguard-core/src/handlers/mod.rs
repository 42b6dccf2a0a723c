//! Edge handlers
//!
//! Run on the dispatcher, never in interrupt context. Each returns a
//! [`Notice`] describing the transition it performed.

pub mod proximity;
pub mod trigger;

pub use proximity::ProximityHandler;
pub use trigger::ManualTriggerHandler;

/// Outcome of a handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// Sensor saw an object arrive
    ObjectDetected,
    /// Sensor cleared
    NoObjectVisible,
    /// Manual latch set
    TriggerOn,
    /// Manual latch cleared
    TriggerOff,
}

impl Notice {
    /// Console line for this notice
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ObjectDetected => "object detected!",
            Notice::NoObjectVisible => "no object visible",
            Notice::TriggerOn => "manual trigger on",
            Notice::TriggerOff => "manual trigger off",
        }
    }
}
