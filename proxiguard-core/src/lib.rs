//! Board-agnostic control policy for the proximity buzzer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Component traits (buzzer output, settle delays)
//! - Proximity state machine and toggle latch
//! - Buzzer arbitration between the sensor and the manual trigger
//! - Edge handlers for the IR sensor and the trigger button
//! - Deferred event queue and serial dispatcher
//! - Watchdog supervision and a host-side liveness monitor
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod buzzer;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod safety;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;
