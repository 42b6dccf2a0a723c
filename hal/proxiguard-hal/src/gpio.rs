//! GPIO pin abstractions
//!
//! Provides the digital output trait implemented by chip-specific HALs, plus
//! the edge type reported by interrupt inputs. Edge notification itself is
//! chip specific and stays in the chip HAL (EXTI on STM32).

/// Signal transition on a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low-to-high transition
    Rising,
    /// High-to-low transition
    Falling,
}

impl Edge {
    /// Edge that produced the given post-transition level
    ///
    /// EXTI lines that listen on both edges only tell us that *something*
    /// changed; the level read right after tells us which way.
    pub fn from_level(high: bool) -> Self {
        if high {
            Edge::Rising
        } else {
            Edge::Falling
        }
    }
}

/// Digital output pin
///
/// Used for the indicator LED and for buzzers that are switched rather than
/// driven by PWM. The pin must already be in output mode when handed over.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
