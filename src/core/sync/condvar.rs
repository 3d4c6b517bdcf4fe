/*!
 * Notify Slot
 *
 * A mutex-protected state paired with the condvar that announces changes to it.
 *
 * # Design: Predicate Lives Under the Same Lock
 *
 * Waiters register and check their predicate while holding the slot mutex,
 * and mutators notify before releasing it. A change can therefore never slip
 * between a waiter's last check and the moment it parks, which is the
 * missed-wakeup hazard of keyed wait queues that park on a separate mutex.
 */

use super::config::StrategyType;
use super::traits::WakeResult;
use parking_lot::{Condvar, Mutex, MutexGuard};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Mutex-guarded state with an attached condvar and waiter count
#[repr(C, align(64))] // Cache-line aligned to prevent false sharing
pub struct NotifySlot<T> {
    state: Mutex<T>,
    condvar: Condvar,
    waiters: AtomicUsize,
}

impl<T> NotifySlot<T> {
    pub fn new(state: T) -> Self {
        Self {
            state: Mutex::new(state),
            condvar: Condvar::new(),
            waiters: AtomicUsize::new(0),
        }
    }

    /// Acquire exclusive access to the slot state
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.state.lock()
    }

    /// Wake every waiter parked on this slot
    ///
    /// Call while holding the guard returned by [`lock`](Self::lock).
    pub fn notify_all(&self) -> WakeResult {
        let count = self.waiters.load(Ordering::Acquire);
        if count == 0 {
            return WakeResult::NoWaiters;
        }

        self.condvar.notify_all();
        WakeResult::Woken(count)
    }

    /// Release the guard for at most `timeout`, then re-acquire it
    ///
    /// Returns `true` if woken by a notification, `false` on timeout or when
    /// the strategy does not use notifications.
    pub fn park(
        &self,
        guard: &mut MutexGuard<'_, T>,
        timeout: Duration,
        strategy: StrategyType,
    ) -> bool {
        self.waiters.fetch_add(1, Ordering::AcqRel);

        let woken = match strategy {
            StrategyType::Poll => {
                MutexGuard::unlocked(guard, || thread::sleep(timeout));
                false
            }
            StrategyType::Condvar | StrategyType::Auto => {
                !self.condvar.wait_for(guard, timeout).timed_out()
            }
        };

        self.waiters.fetch_sub(1, Ordering::AcqRel);
        woken
    }

    /// Number of threads currently parked on this slot
    #[inline]
    pub fn waiter_count(&self) -> usize {
        self.waiters.load(Ordering::Acquire)
    }
}

impl<T: Default> Default for NotifySlot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
