/*!
 * Synchronization Primitives
 *
 * Wait/notify building blocks for the signal registry:
 * - Notify slots: mutex-guarded state with an attached condvar
 * - Lock striping: per-key partitioning of slots
 * - Bounded waits: deadline-driven predicate loops with a poll fallback
 *
 * # Strategies
 *
 * - **Condvar**: mutators notify parked waiters; waiters also re-check every
 *   poll interval
 * - **Poll**: waiters sleep one poll interval between checks, no notification
 */

mod condvar;
mod config;
mod striped;
mod traits;
mod wait;

pub use condvar::NotifySlot;
pub use config::{StrategyType, SyncConfig};
pub use striped::Striped;
pub use traits::WakeResult;
pub use wait::{timeout_from_secs, wait_while, Deadline, WaitError, WaitResult};
