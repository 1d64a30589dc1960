//! Duplicate suppression for accepted words
//!
//! Dictionary files may list the same word more than once. Deduplication is
//! off by default (duplicates are reported as often as they appear) and
//! switched on with `--unique`.

use ahash::RandomState;
use hashbrown::HashSet;
use std::sync::RwLock;

/// Trait for deduplication implementations
pub trait Deduplicator: Send + Sync {
    /// Record an item, returning true when it has not been seen before.
    fn insert(&self, item: &str) -> bool;

    /// Check whether an item has been recorded.
    fn contains(&self, item: &str) -> bool;

    /// Number of recorded items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory HashSet-based deduplicator
pub struct MemoryDeduplicator {
    set: RwLock<HashSet<String, RandomState>>,
}

impl MemoryDeduplicator {
    pub fn new() -> Self {
        Self {
            set: RwLock::new(HashSet::with_hasher(RandomState::new())),
        }
    }
}

impl Default for MemoryDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Deduplicator for MemoryDeduplicator {
    fn insert(&self, item: &str) -> bool {
        let mut set = self.set.write().unwrap();
        set.insert(item.to_string())
    }

    fn contains(&self, item: &str) -> bool {
        let set = self.set.read().unwrap();
        set.contains(item)
    }

    fn len(&self) -> usize {
        let set = self.set.read().unwrap();
        set.len()
    }
}

/// Pass-through deduplicator that treats every item as unique
pub struct NoOpDeduplicator;

impl NoOpDeduplicator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Deduplicator for NoOpDeduplicator {
    fn insert(&self, _item: &str) -> bool {
        true
    }

    fn contains(&self, _item: &str) -> bool {
        false
    }

    fn len(&self) -> usize {
        0
    }
}

/// Select the deduplicator for a pipeline run.
pub fn create_deduplicator(unique: bool) -> Box<dyn Deduplicator> {
    if unique {
        Box::new(MemoryDeduplicator::new())
    } else {
        Box::new(NoOpDeduplicator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_dedup() {
        let dedup = MemoryDeduplicator::new();

        assert!(dedup.insert("garden"));
        assert!(!dedup.insert("garden"));
        assert!(dedup.insert("grange"));

        assert!(dedup.contains("garden"));
        assert!(!dedup.contains("strange"));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_noop_dedup_admits_everything() {
        let dedup = NoOpDeduplicator::new();

        assert!(dedup.insert("garden"));
        assert!(dedup.insert("garden"));
        assert!(!dedup.contains("garden"));
        assert!(dedup.is_empty());
    }

    #[test]
    fn test_create_deduplicator() {
        let dedup = create_deduplicator(true);
        assert!(dedup.insert("once"));
        assert!(!dedup.insert("once"));

        let dedup = create_deduplicator(false);
        assert!(dedup.insert("once"));
        assert!(dedup.insert("once"));
    }
}
