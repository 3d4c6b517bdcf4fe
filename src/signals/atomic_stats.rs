/*!
 * Lock-Free Signal Statistics
 * Uses atomic counters for zero-contention stats tracking in hot paths
 */

use crate::signals::types::SignalStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic signal statistics for lock-free updates
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - All operations use relaxed ordering
/// - Read-only snapshot requires no synchronization
#[repr(C, align(64))]
pub struct AtomicSignalStats {
    signals_created: AtomicU64,
    signals_refreshed: AtomicU64,
    signals_consumed: AtomicU64,
    signals_peeked: AtomicU64,
    fresh_hits: AtomicU64,
    signals_expired: AtomicU64,
    waits_satisfied: AtomicU64,
    waits_timed_out: AtomicU64,
}

impl AtomicSignalStats {
    #[inline]
    pub const fn new() -> Self {
        Self {
            signals_created: AtomicU64::new(0),
            signals_refreshed: AtomicU64::new(0),
            signals_consumed: AtomicU64::new(0),
            signals_peeked: AtomicU64::new(0),
            fresh_hits: AtomicU64::new(0),
            signals_expired: AtomicU64::new(0),
            waits_satisfied: AtomicU64::new(0),
            waits_timed_out: AtomicU64::new(0),
        }
    }

    /// Record a create; `replaced` is true when an entry was refreshed
    #[inline(always)]
    pub fn inc_created(&self, replaced: bool) {
        if replaced {
            self.signals_refreshed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.signals_created.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[inline(always)]
    pub fn inc_consumed(&self) {
        self.signals_consumed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_peeked(&self) {
        self.signals_peeked.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_fresh_hits(&self) {
        self.fresh_hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_expired(&self) {
        self.signals_expired.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of a blocking wait
    #[inline(always)]
    pub fn record_wait(&self, satisfied: bool) {
        if satisfied {
            self.waits_satisfied.fetch_add(1, Ordering::Relaxed);
        } else {
            self.waits_timed_out.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get snapshot of current stats
    ///
    /// # Note
    /// Values may not be perfectly consistent with each other due to concurrent updates,
    /// but each individual value is accurate. This is acceptable for monitoring.
    #[inline]
    pub fn snapshot(&self, active_signals: usize) -> SignalStats {
        SignalStats {
            signals_created: self.signals_created.load(Ordering::Relaxed),
            signals_refreshed: self.signals_refreshed.load(Ordering::Relaxed),
            signals_consumed: self.signals_consumed.load(Ordering::Relaxed),
            signals_peeked: self.signals_peeked.load(Ordering::Relaxed),
            fresh_hits: self.fresh_hits.load(Ordering::Relaxed),
            signals_expired: self.signals_expired.load(Ordering::Relaxed),
            waits_satisfied: self.waits_satisfied.load(Ordering::Relaxed),
            waits_timed_out: self.waits_timed_out.load(Ordering::Relaxed),
            active_signals,
        }
    }
}

impl Default for AtomicSignalStats {
    fn default() -> Self {
        Self::new()
    }
}
