/*!
 * Core Module
 * Shared limits, shard sizing, and synchronization primitives
 */

pub mod limits;
pub mod shard_manager;
pub mod sync;

// Re-export for convenience
pub use shard_manager::{ShardManager, WorkloadProfile};
