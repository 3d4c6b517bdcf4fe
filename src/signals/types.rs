/*!
 * Signal Types
 * Named coordination flags, read modes, and result types
 */

use crate::core::limits::{FORBIDDEN_NAME_CHARS, MAX_SIGNAL_NAME_LEN};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Signal operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal errors
///
/// Absent, expired and timed-out signals are not errors; they are reported
/// as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SignalError {
    #[error("Invalid signal name {name:?}: {reason}")]
    #[diagnostic(
        code(signals::invalid_name),
        help("Use a non-empty name of at most 255 bytes without control characters or path separators.")
    )]
    InvalidName { name: String, reason: String },

    #[error("Process-wide signal manager has not been initialized")]
    #[diagnostic(
        code(signals::not_initialized),
        help("Call init_signal_manager() once at process start.")
    )]
    NotInitialized,

    #[error("Process-wide signal manager is already initialized")]
    #[diagnostic(code(signals::already_initialized))]
    AlreadyInitialized,
}

impl SignalError {
    fn invalid_name(name: &str, reason: &str) -> Self {
        SignalError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Validated signal name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SignalName(String);

impl SignalName {
    /// Validate and wrap a name
    pub fn new(name: impl Into<String>) -> SignalResult<Self> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> SignalResult<()> {
        if name.is_empty() {
            return Err(SignalError::invalid_name(name, "name is empty"));
        }
        if name.len() > MAX_SIGNAL_NAME_LEN {
            return Err(SignalError::invalid_name(name, "name is too long"));
        }
        if name.trim().is_empty() {
            return Err(SignalError::invalid_name(name, "name is only whitespace"));
        }
        if name.chars().any(char::is_control) {
            return Err(SignalError::invalid_name(name, "name contains control characters"));
        }
        if name.contains(FORBIDDEN_NAME_CHARS) {
            return Err(SignalError::invalid_name(name, "name contains a path separator"));
        }
        Ok(())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SignalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SignalName {
    type Error = SignalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SignalName {
    type Error = SignalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SignalName> for String {
    fn from(name: SignalName) -> Self {
        name.0
    }
}

/// A set signal
///
/// There is no boolean state: a signal is set exactly when an entry for its
/// name exists in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub name: SignalName,
    pub created_at: Instant,
}

impl Signal {
    pub fn new(name: SignalName, created_at: Instant) -> Self {
        Self { name, created_at }
    }

    /// Age relative to `now` (zero if `now` precedes creation)
    #[inline]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Whether the signal is no older than `window`
    #[inline]
    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        self.age(now) <= window
    }
}

/// Read semantics for `check_for_signal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// Remove the signal if present; exactly one caller sees `true` per creation
    #[default]
    Consume,
    /// Report presence without touching the store
    Peek,
    /// Present and no older than the window; stale entries are removed
    Fresh(Duration),
}

impl CheckMode {
    /// Map a numeric lifetime in seconds onto a mode
    ///
    /// `0` (and NaN) consumes, negative values peek, positive values bound
    /// freshness.
    pub fn from_lifetime_secs(secs: f64) -> Self {
        if secs < 0.0 {
            CheckMode::Peek
        } else if secs > 0.0 {
            CheckMode::Fresh(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
        } else {
            CheckMode::Consume
        }
    }

    /// Whether a successful check removes the entry
    #[inline]
    pub fn is_consuming(&self) -> bool {
        matches!(self, CheckMode::Consume)
    }
}

impl From<Duration> for CheckMode {
    fn from(window: Duration) -> Self {
        CheckMode::Fresh(window)
    }
}

impl From<Option<Duration>> for CheckMode {
    fn from(window: Option<Duration>) -> Self {
        window.map_or(CheckMode::Consume, CheckMode::Fresh)
    }
}

/// Signal statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStats {
    pub signals_created: u64,
    pub signals_refreshed: u64,
    pub signals_consumed: u64,
    pub signals_peeked: u64,
    pub fresh_hits: u64,
    pub signals_expired: u64,
    pub waits_satisfied: u64,
    pub waits_timed_out: u64,
    pub active_signals: usize,
}
