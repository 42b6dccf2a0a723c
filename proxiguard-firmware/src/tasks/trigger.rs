//! Manual trigger task

use defmt::*;
use proxiguard_core::state::Event;
use proxiguard_hal_stm32::EdgeInput;

use crate::channels::enqueue;

/// Defers each rising edge of the trigger button
#[embassy_executor::task]
pub async fn trigger_task(mut trigger: EdgeInput<'static>) {
    info!("Trigger task started");

    loop {
        trigger.next_rising().await;
        enqueue(Event::ManualTrigger);
    }
}
