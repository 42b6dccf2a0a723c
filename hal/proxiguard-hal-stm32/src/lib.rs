//! STM32-specific HAL for the Proxiguard firmware
//!
//! This crate adapts embassy-stm32 peripherals to the `proxiguard-hal`
//! traits. Supported chips:
//!
//! - STM32L4R5ZI (NUCLEO-L4R5ZI)
//!
//! # Features
//!
//! - `stm32l4r5zi` - Enable support for STM32L4R5ZI
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! The firmware builds the embassy peripherals and wraps them here before
//! handing them to proxiguard-core.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod watchdog;

pub use gpio::{EdgeInput, Stm32Output};
pub use watchdog::IwdgWatchdog;
