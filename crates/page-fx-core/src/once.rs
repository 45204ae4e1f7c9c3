use fnv::FnvHashSet;
use std::hash::Hash;

/// Session-long record of keys that have already been handled.
///
/// Entries are never removed, so each key is accepted at most once.
#[derive(Clone, Debug)]
pub struct OneShot<K> {
    seen: FnvHashSet<K>,
}

impl<K: Hash + Eq> Default for OneShot<K> {
    fn default() -> Self {
        Self {
            seen: FnvHashSet::default(),
        }
    }
}

impl<K: Hash + Eq> OneShot<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`; true only the first time it is seen.
    pub fn mark(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.seen.contains(key)
    }
}
