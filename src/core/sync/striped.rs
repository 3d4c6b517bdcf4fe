/*!
 * Lock Striping Pattern
 * Reduces contention by partitioning state across multiple notify slots
 */

use super::condvar::NotifySlot;
use crate::core::shard_manager::ShardManager;
use ahash::RandomState;
use std::hash::{BuildHasher, Hash};

/// Lock-striped collection of [`NotifySlot`]s
///
/// A key always maps to the same stripe, so every operation on one key is
/// serialized by that stripe's mutex while unrelated keys proceed in parallel.
///
/// # Example
///
/// ```
/// use messagebus_signals::core::sync::Striped;
/// use std::collections::HashMap;
///
/// let stripes: Striped<HashMap<String, u32>> = Striped::new(8, HashMap::new);
/// stripes.slot_for("alpha").lock().insert("alpha".to_string(), 1);
/// assert_eq!(stripes.slot_for("alpha").lock().get("alpha"), Some(&1));
/// ```
pub struct Striped<T> {
    stripes: Box<[NotifySlot<T>]>,
    stripe_mask: usize,
    hasher: RandomState,
}

impl<T> Striped<T> {
    /// Create `stripe_count` stripes (rounded to a power of 2), each
    /// initialized by `init`
    pub fn new(stripe_count: usize, mut init: impl FnMut() -> T) -> Self {
        let stripe_count = ShardManager::normalize(stripe_count);
        let stripes = (0..stripe_count)
            .map(|_| NotifySlot::new(init()))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            stripes,
            stripe_mask: stripe_count - 1,
            hasher: RandomState::new(),
        }
    }

    /// Get stripe index for key
    #[inline]
    fn stripe_index<K: Hash + ?Sized>(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) as usize) & self.stripe_mask
    }

    /// Stripe owning `key`
    #[inline]
    pub fn slot_for<K: Hash + ?Sized>(&self, key: &K) -> &NotifySlot<T> {
        &self.stripes[self.stripe_index(key)]
    }

    /// Iterate over all stripes
    pub fn iter(&self) -> impl Iterator<Item = &NotifySlot<T>> {
        self.stripes.iter()
    }

    /// Number of stripes
    #[inline]
    pub fn stripe_count(&self) -> usize {
        self.stripes.len()
    }
}
