//! GPIO adapters for STM32
//!
//! Wraps embassy-stm32 pins so core logic can drive them through the
//! `proxiguard-hal` traits.

use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Output;
use proxiguard_hal::{Edge, OutputPin};

/// Push-pull output pin
pub struct Stm32Output<'d> {
    pin: Output<'d>,
}

impl<'d> Stm32Output<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for Stm32Output<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// EXTI-backed input that reports edges
///
/// The EXTI line fires on the hardware edge; the level is sampled right
/// after wake-up to tell which edge it was.
pub struct EdgeInput<'d> {
    line: ExtiInput<'d>,
}

impl<'d> EdgeInput<'d> {
    pub fn new(line: ExtiInput<'d>) -> Self {
        Self { line }
    }

    /// Wait for either edge and classify it
    pub async fn next_edge(&mut self) -> Edge {
        self.line.wait_for_any_edge().await;
        Edge::from_level(self.line.is_high())
    }

    /// Wait for a rising edge only
    pub async fn next_rising(&mut self) {
        self.line.wait_for_rising_edge().await;
    }
}
