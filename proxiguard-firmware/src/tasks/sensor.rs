//! IR sensor edge task
//!
//! Waits on the sensor's EXTI line and defers every edge to the dispatcher.
//! Nothing else runs here: the handler may sleep, an edge task must not.

use defmt::*;
use proxiguard_core::state::Event;
use proxiguard_hal_stm32::EdgeInput;

use crate::channels::enqueue;

#[embassy_executor::task]
pub async fn sensor_task(mut sensor: EdgeInput<'static>) {
    info!("Sensor task started");

    loop {
        let edge = sensor.next_edge().await;
        trace!("Sensor edge: {:?}", edge);
        enqueue(Event::Sensor(edge));
    }
}
