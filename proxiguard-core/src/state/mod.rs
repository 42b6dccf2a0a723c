//! Proximity state machine and event definitions
//!
//! The IR sensor state is a pure function of the last processed sensor edge.
//! The manual trigger keeps its own single-bit latch.

pub mod events;
pub mod latch;
pub mod machine;

pub use events::Event;
pub use latch::ToggleLatch;
pub use machine::ProximityState;
