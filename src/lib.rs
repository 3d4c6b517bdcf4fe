/*!
 * Message Bus Signals
 *
 * Process-local coordination flags for components sharing a message bus:
 * named boolean conditions with consuming, peeking and freshness-bounded
 * reads, plus blocking waits for their creation and removal.
 */

pub mod core;
pub mod monitoring;
pub mod signals;

// Re-exports
pub use monitoring::init_tracing;
pub use signals::{
    CheckMode, SignalConfig, SignalError, SignalManager, SignalName, SignalResult, SignalStats,
    WaitCoordinator,
};
