//! Bounded FIFO of deferred events
//!
//! Enqueue never blocks and never allocates, so it is safe to call from an
//! interrupt handler (behind a critical section). A full queue drops the new
//! event and counts the loss.

use heapless::Deque;

use crate::state::Event;

/// Enqueue rejected because the queue is full
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull(pub Event);

/// Fixed-capacity event queue
pub struct EventQueue<const N: usize> {
    events: Deque<Event, N>,
    /// Events dropped since boot
    dropped: u32,
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventQueue<N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Append an event, or drop it if there is no room
    pub fn try_enqueue(&mut self, event: Event) -> Result<(), QueueFull> {
        match self.events.push_back(event) {
            Ok(()) => Ok(()),
            Err(event) => {
                self.dropped = self.dropped.wrapping_add(1);
                Err(QueueFull(event))
            }
        }
    }

    /// Take the oldest event
    pub fn dequeue(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.events.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Events lost to saturation since boot
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
