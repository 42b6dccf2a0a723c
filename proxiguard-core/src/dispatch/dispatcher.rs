//! Event dispatcher
//!
//! Owns every piece of mutable state the handlers touch: the buzzer arbiter,
//! both handlers and the watchdog supervisor. Since only the dispatcher runs
//! handlers, and it runs them one at a time, none of that state needs a lock.

use proxiguard_hal::{OutputPin, Watchdog};

use crate::buzzer::BuzzerArbiter;
use crate::config::SystemConfig;
use crate::handlers::{ManualTriggerHandler, Notice, ProximityHandler};
use crate::safety::{SupervisorError, WatchdogSupervisor};
use crate::state::Event;
use crate::traits::{BuzzerOutput, SettleDelay};

/// Serial executor for deferred events
pub struct Dispatcher<B, I, W> {
    arbiter: BuzzerArbiter<B>,
    proximity: ProximityHandler,
    trigger: ManualTriggerHandler<I>,
    supervisor: WatchdogSupervisor<W>,
    /// Events run to completion
    processed: u32,
    /// Events whose handler reported an error
    failures: u32,
}

impl<B, I, W> Dispatcher<B, I, W>
where
    B: BuzzerOutput,
    I: OutputPin,
    W: Watchdog,
{
    /// Assemble the dispatcher from its peripherals
    ///
    /// The buzzer is silenced and the indicator driven low here, so both are
    /// in their boot state before the first event can run. The supervisor is
    /// normally started by the caller beforehand.
    pub fn new(
        config: &SystemConfig,
        buzzer: B,
        indicator: I,
        supervisor: WatchdogSupervisor<W>,
    ) -> Self {
        Self {
            arbiter: BuzzerArbiter::new(buzzer, config.buzzer.precedence),
            proximity: ProximityHandler::new(config.proximity),
            trigger: ManualTriggerHandler::new(indicator),
            supervisor,
            processed: 0,
            failures: 0,
        }
    }

    /// Run one event to completion
    pub async fn dispatch<D: SettleDelay>(
        &mut self,
        event: Event,
        delay: &mut D,
    ) -> Result<Notice, SupervisorError> {
        self.processed = self.processed.wrapping_add(1);

        let result = match event {
            Event::Sensor(edge) => {
                self.proximity
                    .handle(edge, &mut self.arbiter, &mut self.supervisor, delay)
                    .await
            }
            Event::ManualTrigger => Ok(self.trigger.handle(&mut self.arbiter)),
        };

        if result.is_err() {
            self.failures = self.failures.wrapping_add(1);
        }
        result
    }

    /// Run events until the source runs dry
    ///
    /// `next` yields the oldest pending event. It is called again after every
    /// event, so anything queued while a handler sleeps is picked up in the
    /// same pass. Errors are logged and counted; draining continues. Returns
    /// the number of events processed.
    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    pub async fn drain<D, F>(&mut self, mut next: F, delay: &mut D) -> usize
    where
        D: SettleDelay,
        F: FnMut() -> Option<Event>,
    {
        let mut count = 0;
        while let Some(event) = next() {
            if let Err(error) = self.dispatch(event, delay).await {
                warn!("{:?} failed: {:?}", event, error);
            }
            count += 1;
        }
        count
    }

    /// Number of events run
    pub fn processed(&self) -> u32 {
        self.processed
    }

    /// Number of events whose handler failed
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn arbiter(&self) -> &BuzzerArbiter<B> {
        &self.arbiter
    }

    pub fn proximity(&self) -> &ProximityHandler {
        &self.proximity
    }

    pub fn trigger(&self) -> &ManualTriggerHandler<I> {
        &self.trigger
    }

    pub fn supervisor(&self) -> &WatchdogSupervisor<W> {
        &self.supervisor
    }

    pub fn supervisor_mut(&mut self) -> &mut WatchdogSupervisor<W> {
        &mut self.supervisor
    }
}
