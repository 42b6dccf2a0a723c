//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in proxiguard-core:
//!
//! - PWM buzzer (passive piezo on a timer channel)
//! - GPIO buzzer (active buzzer behind a transistor or SSR)

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
