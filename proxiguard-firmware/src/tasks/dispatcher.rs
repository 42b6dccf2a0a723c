//! Dispatcher task
//!
//! The only task that touches the buzzer, the indicator and the watchdog.
//! Events run one at a time in arrival order; an event that sleeps holds
//! back everything queued behind it.

use defmt::*;
use embassy_time::Delay;

use crate::board::BoardDispatcher;
use crate::channels::{next_event, EVENT_READY};

#[embassy_executor::task]
pub async fn dispatcher_task(mut dispatcher: BoardDispatcher) {
    info!("Dispatcher task started");

    // Async sleep yields to the executor; blocking waits spin on the timer
    let mut delay = Delay;

    loop {
        EVENT_READY.wait().await;

        let count = dispatcher.drain(next_event, &mut delay).await;
        trace!(
            "Drained {} events (processed: {}, failed: {}, kicks: {})",
            count,
            dispatcher.processed(),
            dispatcher.failures(),
            dispatcher.supervisor().kick_count()
        );
    }
}
