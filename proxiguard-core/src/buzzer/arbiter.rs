//! Buzzer arbiter
//!
//! Resolves requests from the two buzzer users into one output state
//! according to a fixed precedence policy.

use crate::traits::BuzzerOutput;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Who is asking for the buzzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerSource {
    /// IR proximity handler
    Proximity,
    /// Manual trigger button
    Manual,
}

/// How competing requests are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Precedence {
    /// The most recent request decides, whoever made it
    #[default]
    LastWriteWins,
    /// Buzzer sounds while either source asks for it
    ///
    /// The manual trigger cannot silence a present object.
    ProximityFirst,
}

/// Single owner of the buzzer output
pub struct BuzzerArbiter<B> {
    buzzer: B,
    precedence: Precedence,
    /// Outstanding request from the proximity handler
    proximity: bool,
    /// Outstanding request from the manual trigger
    manual: bool,
    /// Source of the most recent request
    last_source: Option<BuzzerSource>,
}

impl<B: BuzzerOutput> BuzzerArbiter<B> {
    /// Take ownership of the buzzer and silence it
    pub fn new(buzzer: B, precedence: Precedence) -> Self {
        let mut arbiter = Self {
            buzzer,
            precedence,
            proximity: false,
            manual: false,
            last_source: None,
        };
        // Ensure buzzer starts suspended
        arbiter.buzzer.deactivate();
        arbiter
    }

    /// Record a request and drive the buzzer accordingly
    ///
    /// Returns the resulting output state.
    pub fn request(&mut self, source: BuzzerSource, activate: bool) -> bool {
        match source {
            BuzzerSource::Proximity => self.proximity = activate,
            BuzzerSource::Manual => self.manual = activate,
        }
        self.last_source = Some(source);

        let active = match self.precedence {
            Precedence::LastWriteWins => activate,
            Precedence::ProximityFirst => self.proximity || self.manual,
        };

        self.buzzer.set_active(active);
        active
    }

    /// Check if the buzzer is sounding
    pub fn is_active(&self) -> bool {
        self.buzzer.is_active()
    }

    /// Outstanding request of one source
    pub fn requested(&self, source: BuzzerSource) -> bool {
        match source {
            BuzzerSource::Proximity => self.proximity,
            BuzzerSource::Manual => self.manual,
        }
    }

    /// Source of the most recent request
    pub fn last_source(&self) -> Option<BuzzerSource> {
        self.last_source
    }

    /// Get access to the underlying buzzer
    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }
}
