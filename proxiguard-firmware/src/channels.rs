//! Inter-task communication channels
//!
//! The sensor and trigger tasks push events into the queue; the dispatcher
//! task is woken by `EVENT_READY` and drains it. The queue sits in a blocking
//! critical-section mutex so pushes never await.

use core::cell::RefCell;

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use proxiguard_core::config::EVENT_QUEUE_CAPACITY;
use proxiguard_core::dispatch::{EventQueue, QueueFull};
use proxiguard_core::state::Event;

/// Deferred edge events, oldest first
pub static EVENT_QUEUE: Mutex<CriticalSectionRawMutex, RefCell<EventQueue<EVENT_QUEUE_CAPACITY>>> =
    Mutex::new(RefCell::new(EventQueue::new()));

/// Signal that the queue has work
pub static EVENT_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Queue an event for the dispatcher
///
/// Never blocks. A full queue drops the event.
pub fn enqueue(event: Event) {
    let result = EVENT_QUEUE.lock(|queue| queue.borrow_mut().try_enqueue(event));

    match result {
        Ok(()) => EVENT_READY.signal(()),
        Err(QueueFull(event)) => {
            let dropped = EVENT_QUEUE.lock(|queue| queue.borrow().dropped());
            warn!("Event queue full, dropped {:?} ({} total)", event, dropped);
        }
    }
}

/// Take the oldest queued event
pub fn next_event() -> Option<Event> {
    EVENT_QUEUE.lock(|queue| queue.borrow_mut().dequeue())
}
