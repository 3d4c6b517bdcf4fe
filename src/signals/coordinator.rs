/*!
 * Wait Coordinator
 *
 * Blocking waits for "signal appeared" and "signal went away" transitions.
 *
 * Waiters register a watch on the name's stripe and park on the stripe
 * condvar; every create and removal on that stripe notifies them. Each wait
 * also re-checks at the configured poll interval and never outlives its
 * timeout. Waiters only observe: they never consume the signal they watch.
 */

use super::manager::SignalManager;
use super::types::{SignalName, SignalResult};
use crate::core::sync::Deadline;
use std::time::Duration;
use tracing::trace;

/// Blocking waits bound to one [`SignalManager`]
#[derive(Debug, Clone)]
pub struct WaitCoordinator {
    manager: SignalManager,
}

impl WaitCoordinator {
    pub fn new(manager: SignalManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &SignalManager {
        &self.manager
    }

    /// Block until `name` is set or `timeout` elapses
    ///
    /// Returns `Ok(true)` if the signal is already set, or a creation is
    /// recorded while waiting (even one that another thread consumed before
    /// this waiter woke). A zero timeout reports current presence without
    /// blocking.
    pub fn wait_for_signal_create(&self, name: &str, timeout: Duration) -> SignalResult<bool> {
        let name = SignalName::new(name)?;
        let deadline = Deadline::after(timeout);
        let config = &self.manager.config().sync;

        let mut shard = self.manager.store().lock(&name);
        let baseline = shard.watch(&name);
        let outcome = shard.wait_while(config, deadline, |state| {
            let created = state.events(name.as_str()).creations > baseline.creations;
            !(created || state.contains(name.as_str()))
        });
        drop(shard);

        let observed = outcome.is_ok();
        self.manager.atomic_stats().record_wait(observed);
        trace!(signal = %name, observed, "wait for signal create finished");
        Ok(observed)
    }

    /// Block until `name` is cleared or `timeout` elapses
    ///
    /// Returns `Ok(true)` once a removal of the signal (a consuming read by
    /// anyone, or lazy expiry) is recorded while waiting. A signal that is
    /// never set during the window has no transition to observe, so the
    /// result is `Ok(false)`; a zero timeout therefore always reports
    /// `Ok(false)`.
    pub fn wait_for_signal_clear(&self, name: &str, timeout: Duration) -> SignalResult<bool> {
        let name = SignalName::new(name)?;
        let deadline = Deadline::after(timeout);
        let config = &self.manager.config().sync;

        let mut shard = self.manager.store().lock(&name);
        let baseline = shard.watch(&name);
        let outcome = shard.wait_while(config, deadline, |state| {
            state.events(name.as_str()).removals <= baseline.removals
        });
        drop(shard);

        let observed = outcome.is_ok();
        self.manager.atomic_stats().record_wait(observed);
        trace!(signal = %name, observed, "wait for signal clear finished");
        Ok(observed)
    }
}
