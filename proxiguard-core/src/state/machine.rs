//! Proximity state machine
//!
//! Buzzer and watchdog behavior of the sensor path is a function of the
//! current state and the incoming sensor edge.

use proxiguard_hal::Edge;

/// IR sensor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityState {
    /// Nothing in range; buzzer silent
    #[default]
    ObjectAbsent,
    /// Object in range; buzzer sounding
    ObjectPresent,
}

impl ProximityState {
    /// Check if this state asks for the buzzer
    pub fn buzzer_requested(&self) -> bool {
        matches!(self, ProximityState::ObjectPresent)
    }

    /// Check if entering this state feeds the watchdog
    ///
    /// Only the clear state counts as proof of life. A sensor that stays
    /// occluded therefore starves the watchdog.
    pub fn kicks_watchdog(&self) -> bool {
        matches!(self, ProximityState::ObjectAbsent)
    }

    /// Process a sensor edge and return the next state
    ///
    /// Every edge is acted on, including a repeat of the edge that produced
    /// the current state; the handlers re-run their action in that case.
    pub fn transition(self, edge: Edge) -> Self {
        match edge {
            Edge::Falling => ProximityState::ObjectPresent,
            Edge::Rising => ProximityState::ObjectAbsent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_absent() {
        assert_eq!(ProximityState::default(), ProximityState::ObjectAbsent);
    }

    #[test]
    fn test_falling_edge_means_present() {
        let next = ProximityState::ObjectAbsent.transition(Edge::Falling);
        assert_eq!(next, ProximityState::ObjectPresent);
        assert!(next.buzzer_requested());
        assert!(!next.kicks_watchdog());
    }

    #[test]
    fn test_rising_edge_means_absent() {
        let next = ProximityState::ObjectPresent.transition(Edge::Rising);
        assert_eq!(next, ProximityState::ObjectAbsent);
        assert!(!next.buzzer_requested());
        assert!(next.kicks_watchdog());
    }

    #[test]
    fn test_repeated_edges_are_stable() {
        let state = ProximityState::ObjectPresent.transition(Edge::Falling);
        assert_eq!(state, ProximityState::ObjectPresent);

        let state = ProximityState::ObjectAbsent.transition(Edge::Rising);
        assert_eq!(state, ProximityState::ObjectAbsent);
    }
}
