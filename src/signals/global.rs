/*!
 * Process-Wide Signal Manager
 *
 * One registry per process, installed explicitly at startup. Components that
 * cannot be handed a [`SignalManager`] use these free functions; everything
 * else should take a manager (or clone) directly.
 */

use super::manager::SignalManager;
use super::types::{CheckMode, SignalError, SignalResult};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

static SIGNAL_MANAGER: OnceLock<SignalManager> = OnceLock::new();

/// Install the process-wide manager
///
/// Fails with [`SignalError::AlreadyInitialized`] on a second call; the
/// first manager stays in place.
pub fn init_signal_manager(manager: SignalManager) -> SignalResult<()> {
    SIGNAL_MANAGER
        .set(manager)
        .map_err(|_| SignalError::AlreadyInitialized)?;
    debug!("Process-wide signal manager installed");
    Ok(())
}

/// The process-wide manager, if installed
pub fn signal_manager() -> SignalResult<&'static SignalManager> {
    SIGNAL_MANAGER.get().ok_or(SignalError::NotInitialized)
}

pub fn create_signal(name: &str) -> SignalResult<bool> {
    signal_manager()?.create_signal(name)
}

pub fn check_for_signal(name: &str, mode: impl Into<CheckMode>) -> SignalResult<bool> {
    signal_manager()?.check_for_signal(name, mode)
}

pub fn wait_for_signal_create(name: &str, timeout: Duration) -> SignalResult<bool> {
    signal_manager()?
        .coordinator()
        .wait_for_signal_create(name, timeout)
}

pub fn wait_for_signal_clear(name: &str, timeout: Duration) -> SignalResult<bool> {
    signal_manager()?
        .coordinator()
        .wait_for_signal_clear(name, timeout)
}
