/*!
 * Synchronization Configuration
 *
 * Runtime configuration for wait strategy selection
 */

use crate::core::limits::{DEFAULT_POLL_INTERVAL, MAX_POLL_INTERVAL, MIN_POLL_INTERVAL};
use std::str::FromStr;
use std::time::Duration;

/// Strategy type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Condvar notification on mutation, re-checked every poll interval
    Condvar,
    /// Sleep-and-recheck only, no notification
    Poll,
    /// Auto-select based on platform
    Auto,
}

impl FromStr for StrategyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "condvar" => Ok(StrategyType::Condvar),
            "poll" => Ok(StrategyType::Poll),
            "auto" => Ok(StrategyType::Auto),
            _ => Err(()),
        }
    }
}

/// Synchronization configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Preferred strategy
    pub strategy: StrategyType,
    /// Longest a waiter sleeps before re-checking state
    pub poll_interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::Auto,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl SyncConfig {
    /// Configuration optimized for latency-sensitive waiters
    pub const fn low_latency() -> Self {
        Self {
            strategy: StrategyType::Condvar,
            poll_interval: Duration::from_millis(10),
        }
    }

    /// Configuration optimized for long, idle waits
    pub const fn long_wait() -> Self {
        Self {
            strategy: StrategyType::Auto,
            poll_interval: MAX_POLL_INTERVAL,
        }
    }

    /// Portable sleep-loop configuration
    pub const fn polling(poll_interval: Duration) -> Self {
        Self {
            strategy: StrategyType::Poll,
            poll_interval,
        }
    }

    /// Poll interval clamped to the accepted range
    #[inline]
    pub fn effective_poll_interval(&self) -> Duration {
        self.poll_interval.clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL)
    }

    /// Select concrete strategy
    pub fn select_strategy(&self) -> StrategyType {
        match self.strategy {
            // parking_lot condvars are available on every supported platform
            StrategyType::Auto => StrategyType::Condvar,
            other => other,
        }
    }
}
