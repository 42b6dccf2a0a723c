//! IR proximity handler
//!
//! Falling edge: object arrived. Sound the buzzer, then hold the dispatcher
//! for the settle time so a bouncing sensor does not flood the queue.
//!
//! Rising edge: object left. Silence the buzzer and kick the watchdog. This
//! is the only place the watchdog is fed, so a continuously occluded sensor
//! ends in a reset.

use proxiguard_hal::{Edge, Watchdog};

use super::Notice;
use crate::buzzer::{BuzzerArbiter, BuzzerSource};
use crate::config::ProximityTiming;
use crate::safety::{SupervisorError, WatchdogSupervisor};
use crate::state::ProximityState;
use crate::traits::delay::{busy_wait_us, sleep_ms};
use crate::traits::{BuzzerOutput, SettleDelay};

/// Handler for sensor edges
#[derive(Debug, Clone)]
pub struct ProximityHandler {
    state: ProximityState,
    timing: ProximityTiming,
}

impl ProximityHandler {
    /// Create a handler in the `ObjectAbsent` state
    pub fn new(timing: ProximityTiming) -> Self {
        Self {
            state: ProximityState::default(),
            timing,
        }
    }

    /// Handle one sensor edge to completion
    ///
    /// Blocks the caller for the configured settle/busy-wait time. A failed
    /// kick is reported after the busy-wait has run.
    pub async fn handle<B, W, D>(
        &mut self,
        edge: Edge,
        arbiter: &mut BuzzerArbiter<B>,
        supervisor: &mut WatchdogSupervisor<W>,
        delay: &mut D,
    ) -> Result<Notice, SupervisorError>
    where
        B: BuzzerOutput,
        W: Watchdog,
        D: SettleDelay,
    {
        self.state = self.state.transition(edge);
        arbiter.request(BuzzerSource::Proximity, self.state.buzzer_requested());

        match self.state {
            ProximityState::ObjectPresent => {
                info!("object detected!");

                sleep_ms(delay, self.timing.settle_sleep_ms).await;
                busy_wait_us(delay, self.timing.settle_busy_wait_us);
                Ok(Notice::ObjectDetected)
            }
            ProximityState::ObjectAbsent => {
                info!("no object visible");

                let kicked = supervisor.kick();
                busy_wait_us(delay, self.timing.clear_busy_wait_us);
                kicked.map(|()| Notice::NoObjectVisible)
            }
        }
    }

    /// Current sensor state
    pub fn state(&self) -> ProximityState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buzzer::Precedence;
    use crate::testing::{MockBuzzer, MockWatchdog, RecordingDelay};
    use embassy_futures::block_on;

    fn fixture() -> (
        ProximityHandler,
        BuzzerArbiter<MockBuzzer>,
        WatchdogSupervisor<MockWatchdog>,
        RecordingDelay,
    ) {
        let mut supervisor = WatchdogSupervisor::new(MockWatchdog::default());
        supervisor.start(25_000).unwrap();
        (
            ProximityHandler::new(ProximityTiming::DEFAULT),
            BuzzerArbiter::new(MockBuzzer::default(), Precedence::LastWriteWins),
            supervisor,
            RecordingDelay::default(),
        )
    }

    #[test]
    fn test_object_detected() {
        let (mut handler, mut arbiter, mut supervisor, mut delay) = fixture();

        let notice = block_on(handler.handle(
            Edge::Falling,
            &mut arbiter,
            &mut supervisor,
            &mut delay,
        ))
        .unwrap();

        assert_eq!(notice, Notice::ObjectDetected);
        assert_eq!(notice.message(), "object detected!");
        assert_eq!(handler.state(), ProximityState::ObjectPresent);
        assert!(arbiter.is_active());
        assert_eq!(supervisor.kick_count(), 0);
    }

    #[test]
    fn test_presence_settle_delays() {
        let (mut handler, mut arbiter, mut supervisor, mut delay) = fixture();

        block_on(handler.handle(Edge::Falling, &mut arbiter, &mut supervisor, &mut delay))
            .unwrap();

        assert_eq!(delay.slept_ms, 200);
        assert_eq!(delay.busy_us, 5_000);
        assert_eq!(delay.sleeps, 1);
        assert_eq!(delay.busy_waits, 1);
    }

    #[test]
    fn test_object_cleared() {
        let (mut handler, mut arbiter, mut supervisor, mut delay) = fixture();

        block_on(handler.handle(Edge::Falling, &mut arbiter, &mut supervisor, &mut delay))
            .unwrap();
        let notice =
            block_on(handler.handle(Edge::Rising, &mut arbiter, &mut supervisor, &mut delay))
                .unwrap();

        assert_eq!(notice.message(), "no object visible");
        assert_eq!(handler.state(), ProximityState::ObjectAbsent);
        assert!(!arbiter.is_active());
        assert_eq!(supervisor.kick_count(), 1);
        assert_eq!(supervisor.watchdog().feeds, 1);
    }

    #[test]
    fn test_clear_busy_wait_only() {
        let (mut handler, mut arbiter, mut supervisor, mut delay) = fixture();

        block_on(handler.handle(Edge::Rising, &mut arbiter, &mut supervisor, &mut delay))
            .unwrap();

        assert_eq!(delay.sleeps, 0);
        assert_eq!(delay.busy_us, 5_000);
    }

    #[test]
    fn test_repeated_clear_kicks_every_time() {
        let (mut handler, mut arbiter, mut supervisor, mut delay) = fixture();

        for _ in 0..3 {
            block_on(handler.handle(Edge::Rising, &mut arbiter, &mut supervisor, &mut delay))
                .unwrap();
        }

        assert_eq!(supervisor.kick_count(), 3);
        assert_eq!(supervisor.watchdog().feeds, 3);
        assert!(!arbiter.is_active());
    }

    #[test]
    fn test_clear_without_armed_watchdog() {
        let mut handler = ProximityHandler::new(ProximityTiming::DEFAULT);
        let mut arbiter = BuzzerArbiter::new(MockBuzzer::default(), Precedence::LastWriteWins);
        let mut supervisor = WatchdogSupervisor::new(MockWatchdog::default());
        let mut delay = RecordingDelay::default();

        let result =
            block_on(handler.handle(Edge::Rising, &mut arbiter, &mut supervisor, &mut delay));

        assert_eq!(result, Err(SupervisorError::NotArmed));
        // Buzzer and busy-wait still happened
        assert!(!arbiter.is_active());
        assert_eq!(delay.busy_us, 5_000);
    }
}
