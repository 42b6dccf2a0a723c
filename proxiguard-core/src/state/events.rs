//! Events deferred from interrupt context

use proxiguard_hal::Edge;

/// Events produced by the edge interrupts and consumed by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Transition on the IR sensor input
    ///
    /// Falling = object entered range, rising = object left range.
    Sensor(Edge),
    /// Rising edge on the manual trigger button
    ManualTrigger,
}

impl Event {
    /// Object entered sensor range
    pub const OBJECT_ARRIVED: Event = Event::Sensor(Edge::Falling);

    /// Object left sensor range
    pub const OBJECT_LEFT: Event = Event::Sensor(Edge::Rising);
}
