/*!
 * Signal Store
 *
 * Thread-safe mapping from name to [`Signal`]; the source of truth for which
 * signals are set.
 *
 * # Design: Existence Is State
 *
 * A name is set exactly when it has an entry. Consuming reads are a plain
 * remove under the stripe lock, so check-then-remove is one critical section.
 *
 * # Watches
 *
 * While a waiter is registered for a name, the stripe keeps creation and
 * removal counters for it. Waiters compare counters instead of sampling
 * presence, so a create-then-consume that completes between two wake-ups is
 * still seen. Counters are dropped with the last watcher, which keeps memory
 * proportional to live signals plus active waiters.
 */

use super::types::{Signal, SignalName};
use crate::core::sync::{wait_while, Deadline, NotifySlot, Striped, SyncConfig, WaitResult};
use ahash::RandomState;
use parking_lot::MutexGuard;
use std::collections::HashMap;

/// Creation/removal counters for a watched name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchEvents {
    pub creations: u64,
    pub removals: u64,
}

#[derive(Debug, Default)]
struct Watch {
    watchers: usize,
    events: WatchEvents,
}

/// State behind one stripe lock
#[derive(Debug, Default)]
pub struct Shard {
    signals: HashMap<SignalName, Signal, RandomState>,
    watches: HashMap<SignalName, Watch, RandomState>,
}

impl Shard {
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Signal> {
        self.signals.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.signals.contains_key(name)
    }

    /// Events recorded for `name` since its first watcher registered
    #[inline]
    pub fn events(&self, name: &str) -> WatchEvents {
        self.watches
            .get(name)
            .map(|watch| watch.events)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Lock-striped signal store
pub struct SignalStore {
    stripes: Striped<Shard>,
}

impl SignalStore {
    pub fn new(shards: usize) -> Self {
        Self {
            stripes: Striped::new(shards, Shard::default),
        }
    }

    /// Lock the stripe owning `name`
    pub fn lock(&self, name: &SignalName) -> ShardGuard<'_> {
        let slot = self.stripes.slot_for(name.as_str());
        ShardGuard {
            slot,
            guard: slot.lock(),
            dirty: false,
            watching: None,
        }
    }

    /// Number of set signals across all stripes
    pub fn len(&self) -> usize {
        self.stripes.iter().map(|slot| slot.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stripes.iter().all(|slot| slot.lock().is_empty())
    }

    /// Names of all set signals, sorted
    pub fn names(&self) -> Vec<SignalName> {
        let mut names: Vec<SignalName> = self
            .stripes
            .iter()
            .flat_map(|slot| slot.lock().signals.keys().cloned().collect::<Vec<_>>())
            .collect();
        names.sort();
        names
    }

    pub fn shard_count(&self) -> usize {
        self.stripes.stripe_count()
    }
}

/// Exclusive access to one stripe
///
/// Mutations mark the guard dirty; parked waiters are notified before the
/// lock is released, either on drop or before this guard parks itself.
pub struct ShardGuard<'a> {
    slot: &'a NotifySlot<Shard>,
    guard: MutexGuard<'a, Shard>,
    dirty: bool,
    watching: Option<SignalName>,
}

impl<'a> ShardGuard<'a> {
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Signal> {
        self.guard.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.guard.contains(name)
    }

    /// Insert or replace, returning the previous entry
    pub fn insert(&mut self, signal: Signal) -> Option<Signal> {
        let shard = &mut *self.guard;
        if let Some(watch) = shard.watches.get_mut(signal.name.as_str()) {
            watch.events.creations += 1;
        }
        self.dirty = true;
        shard.signals.insert(signal.name.clone(), signal)
    }

    /// Remove the entry for `name` if present
    pub fn remove(&mut self, name: &str) -> Option<Signal> {
        let shard = &mut *self.guard;
        let removed = shard.signals.remove(name)?;
        if let Some(watch) = shard.watches.get_mut(name) {
            watch.events.removals += 1;
        }
        self.dirty = true;
        Some(removed)
    }

    /// Register as a watcher of `name` for the lifetime of this guard
    ///
    /// Returns the baseline counters to compare against later.
    pub fn watch(&mut self, name: &SignalName) -> WatchEvents {
        self.unwatch();
        let watch = self.guard.watches.entry(name.clone()).or_default();
        watch.watchers += 1;
        self.watching = Some(name.clone());
        watch.events
    }

    fn unwatch(&mut self) {
        let Some(name) = self.watching.take() else {
            return;
        };
        let shard = &mut *self.guard;
        if let Some(watch) = shard.watches.get_mut(name.as_str()) {
            watch.watchers -= 1;
            if watch.watchers == 0 {
                shard.watches.remove(name.as_str());
            }
        }
    }

    /// Wait while `predicate` holds, releasing the stripe lock while parked
    pub fn wait_while<F>(
        &mut self,
        config: &SyncConfig,
        deadline: Deadline,
        mut predicate: F,
    ) -> WaitResult<()>
    where
        F: FnMut(&Shard) -> bool,
    {
        self.flush();
        wait_while(self.slot, &mut self.guard, config, deadline, |shard| {
            predicate(shard)
        })
    }

    /// Notify parked waiters of pending mutations
    fn flush(&mut self) {
        if self.dirty {
            self.slot.notify_all();
            self.dirty = false;
        }
    }
}

impl Drop for ShardGuard<'_> {
    fn drop(&mut self) {
        self.unwatch();
        self.flush();
    }
}
