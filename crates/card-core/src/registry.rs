//! Keyed set of mounted cards, pruned of cards that stopped on their own.

use fnv::FnvHashMap;

/// Anything that can report whether its frame loop is still running.
pub trait Mounted {
    fn is_mounted(&self) -> bool;
}

impl<S: crate::Surface + 'static, H: crate::FrameHost + 'static> Mounted for crate::TiltCard<S, H> {
    fn is_mounted(&self) -> bool {
        crate::TiltCard::is_mounted(self)
    }
}

/// Removed entries are handed back rather than dropped, so callers holding
/// the registry behind a `RefCell` can release the borrow before teardown
/// runs.
pub struct CardRegistry<V> {
    entries: FnvHashMap<String, V>,
}

impl<V> Default for CardRegistry<V> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<V: Mounted> CardRegistry<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    /// Take out every card whose loop has stopped (e.g. its surface was
    /// detached).
    pub fn prune(&mut self) -> Vec<V> {
        let stale: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, v)| !v.is_mounted())
            .map(|(k, _)| k.clone())
            .collect();
        stale
            .iter()
            .filter_map(|k| self.entries.remove(k))
            .collect()
    }

    /// Register `value` under `key`. Returns the replaced entry, if any, plus
    /// all pruned ones.
    pub fn insert(&mut self, key: String, value: V) -> Vec<V> {
        let mut released = self.prune();
        if let Some(previous) = self.entries.insert(key, value) {
            released.push(previous);
        }
        released
    }
}
