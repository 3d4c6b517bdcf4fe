/*!
 * Bounded Waits
 *
 * Deadline arithmetic and the predicate-driven wait loop used by every
 * blocking operation. Each pass re-checks the predicate under the slot lock,
 * then parks for at most one poll interval, so a missed notification costs
 * at most one interval of latency and never the whole timeout.
 */

use super::condvar::NotifySlot;
use super::config::SyncConfig;
use crate::core::limits::MAX_WAIT_TIMEOUT;
use parking_lot::MutexGuard;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Result type for wait operations
pub type WaitResult<T> = Result<T, WaitError>;

/// Wait operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitError {
    #[error("Wait operation timed out")]
    Timeout,
}

/// Point in time after which a wait gives up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `timeout` from now, clamped to [`MAX_WAIT_TIMEOUT`]
    pub fn after(timeout: Duration) -> Self {
        let now = Instant::now();
        let timeout = timeout.min(MAX_WAIT_TIMEOUT);
        Self {
            at: now.checked_add(timeout).unwrap_or(now),
        }
    }

    /// Time left, or `None` once the deadline has passed
    #[inline]
    pub fn remaining(&self) -> Option<Duration> {
        let left = self.at.saturating_duration_since(Instant::now());
        (!left.is_zero()).then_some(left)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_none()
    }
}

/// Convert a possibly negative or non-finite seconds value into a timeout
///
/// Negative and NaN become zero (resolve immediately); oversized values are
/// capped at [`MAX_WAIT_TIMEOUT`].
pub fn timeout_from_secs(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs)
        .unwrap_or(MAX_WAIT_TIMEOUT)
        .min(MAX_WAIT_TIMEOUT)
}

/// Wait while `predicate` holds
///
/// The predicate runs under the slot lock before the first park and after
/// every wake-up. Returns `Ok(())` as soon as it returns `false`, and
/// `Err(WaitError::Timeout)` if it still holds when the deadline passes.
pub fn wait_while<T, F>(
    slot: &NotifySlot<T>,
    guard: &mut MutexGuard<'_, T>,
    config: &SyncConfig,
    deadline: Deadline,
    mut predicate: F,
) -> WaitResult<()>
where
    F: FnMut(&mut T) -> bool,
{
    let strategy = config.select_strategy();
    let interval = config.effective_poll_interval();

    loop {
        if !predicate(&mut **guard) {
            return Ok(());
        }

        let Some(remaining) = deadline.remaining() else {
            return Err(WaitError::Timeout);
        };

        slot.park(guard, remaining.min(interval), strategy);
    }
}
