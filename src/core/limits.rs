/*!
 * System Limits and Constants
 *
 * Centralized location for signal registry limits, thresholds, and tuning knobs.
 * Organized by domain for maintainability and discoverability.
 *
 * ## Conventions
 * - Values are grouped by domain (names, waits, sharding)
 * - Performance-critical constants are marked with [PERF]
 * - Latency-bounding constants are marked with [LATENCY]
 */

use std::time::Duration;

// =============================================================================
// SIGNAL NAMES
// =============================================================================

/// Maximum signal name length in bytes
/// Matches the common filesystem name limit so names stay usable as file stems
pub const MAX_SIGNAL_NAME_LEN: usize = 255;

/// Characters rejected anywhere in a signal name
pub const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\'];

// =============================================================================
// WAITS
// =============================================================================

/// Default re-check interval for blocking waits (50ms)
/// [LATENCY] Upper bound on how late a waiter may notice a state change
/// when no notification reaches it
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Lowest accepted poll interval (1ms)
/// [PERF] Below this, polling waiters burn CPU for no latency gain
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Highest accepted poll interval (250ms)
/// [LATENCY] Keeps polling waits sub-second
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Longest single wait accepted by the coordinator (24h)
/// Longer timeouts are clamped; there is no indefinite wait
pub const MAX_WAIT_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

// =============================================================================
// SHARDING
// =============================================================================

/// Shard count bounds (min/max)
/// [PERF] Auto-calculated based on CPU count, clamped to this range
pub const MIN_SHARD_COUNT: usize = 1;
pub const MAX_SHARD_COUNT: usize = 256;
