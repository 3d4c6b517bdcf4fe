/*!
 * Signal Manager
 * Public create/check surface over the signal store, owning locking and expiry policy
 */

use super::atomic_stats::AtomicSignalStats;
use super::clock::{Clock, MonotonicClock};
use super::config::SignalConfig;
use super::coordinator::WaitCoordinator;
use super::store::SignalStore;
use super::types::{CheckMode, Signal, SignalName, SignalResult, SignalStats};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Process-local registry of named, time-sensitive boolean flags
///
/// Cloning is cheap and every clone shares the same registry. Construct one
/// per process (or per test) and hand clones to the code that needs it.
///
/// # Example
///
/// ```
/// use messagebus_signals::signals::{CheckMode, SignalManager};
/// use std::time::Duration;
///
/// let signals = SignalManager::new();
/// signals.create_signal("ready").unwrap();
///
/// // Fresh and peek reads leave the signal in place
/// assert!(signals.check_for_signal("ready", Duration::from_secs(60)).unwrap());
/// assert!(signals.check_for_signal("ready", CheckMode::Peek).unwrap());
///
/// // A consuming read acknowledges it exactly once
/// assert!(signals.check_for_signal("ready", CheckMode::Consume).unwrap());
/// assert!(!signals.check_for_signal("ready", CheckMode::Consume).unwrap());
/// ```
#[derive(Clone)]
pub struct SignalManager {
    store: Arc<SignalStore>,
    clock: Arc<dyn Clock>,
    stats: Arc<AtomicSignalStats>,
    config: Arc<SignalConfig>,
}

impl SignalManager {
    pub fn new() -> Self {
        Self::with_config(SignalConfig::default())
    }

    pub fn with_config(config: SignalConfig) -> Self {
        debug!(
            shards = config.shards,
            strategy = ?config.sync.strategy,
            poll_interval_ms = config.sync.poll_interval.as_millis() as u64,
            "Signal manager initialized"
        );
        Self {
            store: Arc::new(SignalStore::new(config.shards)),
            clock: Arc::new(MonotonicClock),
            stats: Arc::new(AtomicSignalStats::new()),
            config: Arc::new(config),
        }
    }

    /// Replace the time source used to stamp and age signals
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set `name`, replacing any existing entry and resetting its age
    ///
    /// Always `Ok(true)` for a valid name.
    pub fn create_signal(&self, name: &str) -> SignalResult<bool> {
        let name = SignalName::new(name)?;
        let mut shard = self.store.lock(&name);
        let created_at = self.clock.now();
        let replaced = shard
            .insert(Signal::new(name.clone(), created_at))
            .is_some();
        drop(shard);

        self.stats.inc_created(replaced);
        trace!(signal = %name, replaced, "Signal created");
        Ok(true)
    }

    /// Read `name` with the given semantics
    ///
    /// `mode` accepts a [`CheckMode`], a `Duration` (freshness window) or an
    /// `Option<Duration>` (`None` consumes).
    pub fn check_for_signal(&self, name: &str, mode: impl Into<CheckMode>) -> SignalResult<bool> {
        let name = SignalName::new(name)?;
        let mode = mode.into();
        let mut shard = self.store.lock(&name);

        let found = match mode {
            CheckMode::Consume => {
                let consumed = shard.remove(name.as_str()).is_some();
                if consumed {
                    self.stats.inc_consumed();
                }
                consumed
            }
            CheckMode::Peek => {
                self.stats.inc_peeked();
                shard.contains(name.as_str())
            }
            CheckMode::Fresh(window) => {
                let now = self.clock.now();
                match shard.get(name.as_str()).map(|signal| signal.age(now)) {
                    None => false,
                    Some(age) if age <= window => {
                        self.stats.inc_fresh_hits();
                        true
                    }
                    Some(age) => {
                        shard.remove(name.as_str());
                        self.stats.inc_expired();
                        debug!(
                            signal = %name,
                            age_ms = age.as_millis() as u64,
                            window_ms = window.as_millis() as u64,
                            "Expired signal removed"
                        );
                        false
                    }
                }
            }
        };

        Ok(found)
    }

    /// Whether `name` is set, without consuming it
    pub fn is_set(&self, name: &str) -> SignalResult<bool> {
        self.check_for_signal(name, CheckMode::Peek)
    }

    /// Age of `name` if set
    pub fn signal_age(&self, name: &str) -> SignalResult<Option<Duration>> {
        let name = SignalName::new(name)?;
        let shard = self.store.lock(&name);
        let now = self.clock.now();
        Ok(shard.get(name.as_str()).map(|signal| signal.age(now)))
    }

    /// Number of set signals
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Names of all set signals, sorted
    pub fn names(&self) -> Vec<SignalName> {
        self.store.names()
    }

    /// Get signal statistics
    pub fn stats(&self) -> SignalStats {
        self.stats.snapshot(self.store.len())
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Blocking waits over this registry
    pub fn coordinator(&self) -> WaitCoordinator {
        WaitCoordinator::new(self.clone())
    }

    pub(crate) fn store(&self) -> &SignalStore {
        &self.store
    }

    pub(crate) fn atomic_stats(&self) -> &AtomicSignalStats {
        &self.stats
    }
}

impl Default for SignalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SignalManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalManager")
            .field("signals", &self.store.len())
            .field("shards", &self.store.shard_count())
            .field("clock", &self.clock)
            .field("config", &self.config)
            .finish()
    }
}
