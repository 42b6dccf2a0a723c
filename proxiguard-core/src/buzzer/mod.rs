//! Buzzer ownership
//!
//! Both the proximity handler and the manual trigger want the same buzzer.
//! They request through the arbiter, which is the only writer.

pub mod arbiter;

pub use arbiter::{BuzzerArbiter, BuzzerSource, Precedence};
