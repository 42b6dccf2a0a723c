//! Configuration type definitions
//!
//! The firmware bakes these in at build time from `system.toml`; host tests
//! construct them directly.

use crate::buzzer::Precedence;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Watchdog timeout of the reference configuration
pub const DEFAULT_WATCHDOG_TIMEOUT_US: u32 = 25_000;

/// Shortest timeout the independent watchdog can count (one LSI tick at /4)
pub const WATCHDOG_MIN_TIMEOUT_US: u32 = 125;

/// Longest timeout the independent watchdog can count (12-bit reload at /256)
pub const WATCHDOG_MAX_TIMEOUT_US: u32 = 32_768_000;

/// Deferred events that fit in the dispatcher queue
pub const EVENT_QUEUE_CAPACITY: usize = 32;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Watchdog timeout must be non-zero
    ZeroWatchdogTimeout,
    /// Watchdog timeout outside what the hardware can count
    WatchdogTimeoutOutOfRange(u32),
    /// Idle interval must be non-zero
    ZeroIdleInterval,
    /// Buzzer PWM frequency must be non-zero
    ZeroBuzzerFrequency,
    /// Duty cycle above 100%
    DutyOutOfRange(u8),
}

/// Watchdog configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WatchdogConfig {
    /// Time allowed between kicks (microseconds)
    pub timeout_us: u32,
}

impl WatchdogConfig {
    pub const DEFAULT: Self = Self {
        timeout_us: DEFAULT_WATCHDOG_TIMEOUT_US,
    };
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Delays the proximity handler holds the dispatcher for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ProximityTiming {
    /// Yielding sleep after an object is detected (ms)
    pub settle_sleep_ms: u32,
    /// Busy-wait after the settle sleep (µs)
    pub settle_busy_wait_us: u32,
    /// Busy-wait after the sensor clears (µs)
    pub clear_busy_wait_us: u32,
}

impl ProximityTiming {
    pub const DEFAULT: Self = Self {
        settle_sleep_ms: 200,
        settle_busy_wait_us: 5_000,
        clear_busy_wait_us: 5_000,
    };

    /// No waiting at all, for tests and simulation
    pub const ZERO: Self = Self {
        settle_sleep_ms: 0,
        settle_busy_wait_us: 0,
        clear_busy_wait_us: 0,
    };

    /// Total time a presence event occupies the dispatcher (µs)
    pub fn presence_hold_us(&self) -> u64 {
        self.settle_sleep_ms as u64 * 1_000 + self.settle_busy_wait_us as u64
    }
}

impl Default for ProximityTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Buzzer output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BuzzerConfig {
    /// Arbitration between the proximity handler and the manual trigger
    pub precedence: Precedence,
    /// PWM carrier frequency (Hz)
    pub frequency_hz: u32,
    /// Duty cycle while sounding (0-100%)
    pub duty_percent: u8,
}

impl BuzzerConfig {
    pub const DEFAULT: Self = Self {
        precedence: Precedence::LastWriteWins,
        frequency_hz: 2_000,
        duty_percent: 50,
    };
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Idle loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct IdleConfig {
    /// Main task sleep interval (ms)
    pub interval_ms: u32,
}

impl IdleConfig {
    pub const DEFAULT: Self = Self { interval_ms: 20 };
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete system configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SystemConfig {
    pub watchdog: WatchdogConfig,
    pub proximity: ProximityTiming,
    pub buzzer: BuzzerConfig,
    pub idle: IdleConfig,
}

impl SystemConfig {
    /// Reference configuration
    pub const DEFAULT: Self = Self {
        watchdog: WatchdogConfig::DEFAULT,
        proximity: ProximityTiming::DEFAULT,
        buzzer: BuzzerConfig::DEFAULT,
        idle: IdleConfig::DEFAULT,
    };

    /// Check value ranges
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.watchdog.timeout_us == 0 {
            return Err(ConfigError::ZeroWatchdogTimeout);
        }
        let timeout_us = self.watchdog.timeout_us;
        if !(WATCHDOG_MIN_TIMEOUT_US..=WATCHDOG_MAX_TIMEOUT_US).contains(&timeout_us) {
            return Err(ConfigError::WatchdogTimeoutOutOfRange(timeout_us));
        }
        if self.idle.interval_ms == 0 {
            return Err(ConfigError::ZeroIdleInterval);
        }
        if self.buzzer.frequency_hz == 0 {
            return Err(ConfigError::ZeroBuzzerFrequency);
        }
        if self.buzzer.duty_percent > 100 {
            return Err(ConfigError::DutyOutOfRange(self.buzzer.duty_percent));
        }
        Ok(())
    }

    /// Check if a presence event alone outlasts the watchdog
    ///
    /// True for the reference values: the 205ms settle hold is longer than
    /// the 25ms timeout, so any detection ends in a reset unless something
    /// else kicks in between. Valid, but worth a build warning.
    pub fn settle_exceeds_watchdog(&self) -> bool {
        self.proximity.presence_hold_us() >= self.watchdog.timeout_us as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference() {
        let config = SystemConfig::default();
        assert_eq!(config, SystemConfig::DEFAULT);
        assert_eq!(config.watchdog.timeout_us, 25_000);
        assert_eq!(config.proximity.settle_sleep_ms, 200);
        assert_eq!(config.proximity.settle_busy_wait_us, 5_000);
        assert_eq!(config.proximity.clear_busy_wait_us, 5_000);
        assert_eq!(config.idle.interval_ms, 20);
        assert_eq!(config.buzzer.precedence, Precedence::LastWriteWins);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = SystemConfig::DEFAULT;
        config.watchdog.timeout_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroWatchdogTimeout));
    }

    #[test]
    fn test_validate_rejects_oversized_timeout() {
        let mut config = SystemConfig::DEFAULT;
        config.watchdog.timeout_us = 60_000_000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::WatchdogTimeoutOutOfRange(60_000_000))
        );

        config.watchdog.timeout_us = WATCHDOG_MAX_TIMEOUT_US;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_undersized_timeout() {
        let mut config = SystemConfig::DEFAULT;
        config.watchdog.timeout_us = WATCHDOG_MIN_TIMEOUT_US - 1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::WatchdogTimeoutOutOfRange(WATCHDOG_MIN_TIMEOUT_US - 1))
        );

        config.watchdog.timeout_us = WATCHDOG_MIN_TIMEOUT_US;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_idle() {
        let mut config = SystemConfig::DEFAULT;
        config.idle.interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroIdleInterval));
    }

    #[test]
    fn test_validate_rejects_duty() {
        let mut config = SystemConfig::DEFAULT;
        config.buzzer.duty_percent = 101;
        assert_eq!(config.validate(), Err(ConfigError::DutyOutOfRange(101)));
    }

    #[test]
    fn test_settle_exceeds_watchdog() {
        assert!(SystemConfig::DEFAULT.settle_exceeds_watchdog());

        let mut config = SystemConfig::DEFAULT;
        config.proximity = ProximityTiming::ZERO;
        assert!(!config.settle_exceeds_watchdog());
        assert_eq!(ProximityTiming::ZERO.presence_hold_us(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_sections() {
        let config: SystemConfig = toml::from_str(
            "[watchdog]\ntimeout_us = 50000\n\n[buzzer]\nprecedence = \"proximity_first\"\n",
        )
        .unwrap();

        assert_eq!(config.watchdog.timeout_us, 50_000);
        assert_eq!(config.buzzer.precedence, Precedence::ProximityFirst);
        // Missing keys and sections fall back to the reference values
        assert_eq!(config.buzzer.duty_percent, 50);
        assert_eq!(config.proximity, ProximityTiming::DEFAULT);
        assert_eq!(config.idle, IdleConfig::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_unknown_key() {
        let result: Result<SystemConfig, _> = toml::from_str("[idle]\ninterval = 20\n");
        assert!(result.is_err());
    }
}
