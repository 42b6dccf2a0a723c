//! Deferred event dispatch
//!
//! Interrupt context only enqueues. One dispatcher drains the queue in
//! arrival order and runs each event to completion before the next.

pub mod dispatcher;
pub mod queue;

pub use dispatcher::Dispatcher;
pub use queue::{EventQueue, QueueFull};
