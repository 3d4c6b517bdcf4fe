/*!
 * Signals Module
 *
 * Named boolean conditions shared between threads of one process. A signal
 * is set while its entry exists; reads either consume it, peek at it, or
 * accept it only while fresh. Blocking waits observe creation and removal.
 */

mod atomic_stats;
mod clock;
mod config;
mod coordinator;
pub mod global;
mod manager;
mod store;
pub mod types;

// Re-export public API
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{SignalConfig, ENV_POLL_INTERVAL_MS, ENV_SHARDS, ENV_WAIT_STRATEGY};
pub use coordinator::WaitCoordinator;
pub use global::{
    check_for_signal, create_signal, init_signal_manager, signal_manager, wait_for_signal_clear,
    wait_for_signal_create,
};
pub use manager::SignalManager;
pub use store::{Shard, ShardGuard, SignalStore, WatchEvents};
pub use types::{CheckMode, Signal, SignalError, SignalName, SignalResult, SignalStats};
