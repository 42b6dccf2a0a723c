//! Toggle latch for the manual trigger

/// Single-bit state flipped on every qualifying event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleLatch {
    set: bool,
}

impl ToggleLatch {
    /// Create a cleared latch
    pub const fn new() -> Self {
        Self { set: false }
    }

    /// Flip the latch and return the new state
    pub fn flip(&mut self) -> bool {
        self.set = !self.set;
        self.set
    }

    /// Check if the latch is set
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Latch value as 0 or 1
    pub fn value(&self) -> u8 {
        self.set as u8
    }
}
