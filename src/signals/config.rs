/*!
 * Signal Configuration
 *
 * Environment variables:
 * - SIGNALS_WAIT_STRATEGY: `condvar`, `poll` or `auto` (default: auto)
 * - SIGNALS_POLL_INTERVAL_MS: waiter re-check interval, clamped to 1..=250
 * - SIGNALS_SHARDS: store stripe count, rounded to a power of two
 */

use crate::core::limits::{MAX_POLL_INTERVAL, MIN_POLL_INTERVAL};
use crate::core::shard_manager::{ShardManager, WorkloadProfile};
use crate::core::sync::{StrategyType, SyncConfig};
use std::time::Duration;

pub const ENV_WAIT_STRATEGY: &str = "SIGNALS_WAIT_STRATEGY";
pub const ENV_POLL_INTERVAL_MS: &str = "SIGNALS_POLL_INTERVAL_MS";
pub const ENV_SHARDS: &str = "SIGNALS_SHARDS";

/// Signal subsystem configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalConfig {
    /// Wait strategy and poll interval for the coordinator
    pub sync: SyncConfig,
    /// Number of store stripes
    pub shards: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            shards: ShardManager::shards(WorkloadProfile::MediumContention),
        }
    }
}

impl SignalConfig {
    /// Single stripe, one mutex for the whole registry
    pub fn single_lock() -> Self {
        Self {
            shards: 1,
            ..Self::default()
        }
    }

    pub fn with_sync(mut self, sync: SyncConfig) -> Self {
        self.sync = sync;
        self
    }

    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = ShardManager::normalize(shards);
        self
    }

    /// Defaults overridden by `SIGNALS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`; unparseable values are ignored
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(strategy) = lookup(ENV_WAIT_STRATEGY)
            .and_then(|value| value.parse::<StrategyType>().ok())
        {
            config.sync.strategy = strategy;
        }

        if let Some(millis) = lookup(ENV_POLL_INTERVAL_MS)
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.sync.poll_interval =
                Duration::from_millis(millis).clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL);
        }

        if let Some(shards) = lookup(ENV_SHARDS).and_then(|value| value.trim().parse::<usize>().ok())
        {
            config.shards = ShardManager::normalize(shards);
        }

        config
    }
}
