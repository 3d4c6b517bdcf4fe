/*!
 * Shard Configuration
 *
 * CPU-topology-aware shard count calculation for the signal store.
 *
 * # Design: Pure Functions Over Singleton
 *
 * Shard counts are computed by pure `#[inline]` functions instead of being
 * cached in a global. Repeated calls are cheap because the stdlib already
 * caches the parallelism query.
 *
 * - **Power-of-2 shards**: Enable fast modulo via bitwise AND (x & (n-1))
 * - **CPU-proportional scaling**: More cores = more beneficial parallelism
 */

use crate::core::limits::{MAX_SHARD_COUNT, MIN_SHARD_COUNT};

/// Hardware-aware shard configuration (pure functions)
pub struct ShardManager;

impl ShardManager {
    /// Get CPU count
    #[inline]
    pub fn cpu_count() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or_else(|_| {
                tracing::debug!("Failed to detect CPU count, defaulting to 8");
                8
            })
    }

    /// Calculate shard count for a given workload profile
    #[inline]
    pub fn shards(profile: WorkloadProfile) -> usize {
        let multiplier = match profile {
            // Many threads creating and consuming distinct names
            WorkloadProfile::HighContention => 4,
            WorkloadProfile::MediumContention => 2,
            // A handful of coordination flags
            WorkloadProfile::LowContention => 1,
        };

        Self::shards_with_multiplier(multiplier)
    }

    /// Calculate shards with custom multiplier
    #[inline]
    pub fn shards_with_multiplier(multiplier: usize) -> usize {
        Self::normalize(Self::cpu_count().saturating_mul(multiplier))
    }

    /// Round a requested shard count to a power of two within bounds
    #[inline]
    pub fn normalize(requested: usize) -> usize {
        requested
            .max(1)
            .checked_next_power_of_two()
            .unwrap_or(MAX_SHARD_COUNT)
            .clamp(MIN_SHARD_COUNT, MAX_SHARD_COUNT)
    }
}

/// Workload characterization for shard count calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadProfile {
    /// Shard count: 4x CPU cores
    HighContention,

    /// Shard count: 2x CPU cores
    MediumContention,

    /// Shard count: 1x CPU cores
    LowContention,
}
