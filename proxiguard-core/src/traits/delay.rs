//! Settle delays used by the edge handlers
//!
//! Handlers wait in two ways: a *sleep* that lets other tasks run, and a
//! *busy-wait* that holds the dispatcher without yielding. Both come from a
//! single provider so tests can substitute a zero-time recorder.

use embedded_hal::delay::DelayNs as BusyWait;
use embedded_hal_async::delay::DelayNs as Sleep;

/// Delay provider able to both sleep and busy-wait
///
/// `embassy_time::Delay` satisfies this on target.
pub trait SettleDelay: Sleep + BusyWait {}

impl<T: Sleep + BusyWait> SettleDelay for T {}

/// Sleep for `ms` milliseconds, yielding to other tasks
pub async fn sleep_ms<D: SettleDelay>(delay: &mut D, ms: u32) {
    Sleep::delay_ms(delay, ms).await;
}

/// Spin for `us` microseconds without yielding
pub fn busy_wait_us<D: SettleDelay>(delay: &mut D, us: u32) {
    BusyWait::delay_us(delay, us);
}
