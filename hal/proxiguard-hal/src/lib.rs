//! Proxiguard Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the policy layer talks to. Chip
//! specific crates implement them for real peripherals, and host tests
//! implement them with simulated ones.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  proxiguard-core / proxiguard-drivers   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  proxiguard-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ proxiguard-   │       │ simulated     │
//! │ hal-stm32     │       │ (host tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`gpio::Edge`] - Input transition
//! - [`watchdog::Watchdog`] - Hardware liveness timer

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod watchdog;

// Re-export key traits at crate root for convenience
pub use gpio::{Edge, OutputPin};
pub use watchdog::Watchdog;
