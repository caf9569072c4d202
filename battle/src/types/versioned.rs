//! Sparse generation-indexed snapshots

use std::collections::BTreeMap;

use super::generation::Generation;

/// A `Latest` snapshot plus the historical snapshots that differ from it.
///
/// A historical snapshot under generation `K` holds the rules effective up to
/// and including `K`; the next recorded change (or `Latest`) supersedes it.
/// Generations with no entry inherit from that window.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionedRecord<T> {
    latest: T,
    history: BTreeMap<u8, T>,
}

impl<T> VersionedRecord<T> {
    /// Create a record whose rules have never changed
    pub fn new(latest: T) -> Self {
        Self {
            latest,
            history: BTreeMap::new(),
        }
    }

    pub fn latest(&self) -> &T {
        &self.latest
    }

    /// Snapshot stored under exactly `generation`
    pub fn get(&self, generation: Generation) -> Option<&T> {
        match generation {
            Generation::Numbered(n) => self.history.get(&n),
            Generation::Latest => Some(&self.latest),
        }
    }

    pub fn get_mut(&mut self, generation: Generation) -> Option<&mut T> {
        match generation {
            Generation::Numbered(n) => self.history.get_mut(&n),
            Generation::Latest => Some(&mut self.latest),
        }
    }

    /// Store a snapshot, returning the one it replaced
    pub fn insert(&mut self, generation: Generation, snapshot: T) -> Option<T> {
        match generation {
            Generation::Numbered(n) => self.history.insert(n, snapshot),
            Generation::Latest => Some(std::mem::replace(&mut self.latest, snapshot)),
        }
    }

    /// Snapshot under `generation`, created with `default` if absent
    pub fn get_or_insert_with(&mut self, generation: Generation, default: impl FnOnce() -> T) -> &mut T {
        match generation {
            Generation::Numbered(n) => self.history.entry(n).or_insert_with(default),
            Generation::Latest => &mut self.latest,
        }
    }

    pub fn contains(&self, generation: Generation) -> bool {
        self.get(generation).is_some()
    }

    /// Whether any historical snapshot is recorded
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Recorded generations in ascending order, ending with `Latest`
    pub fn generations(&self) -> impl Iterator<Item = Generation> + '_ {
        self.history
            .keys()
            .map(|n| Generation::Numbered(*n))
            .chain(std::iter::once(Generation::Latest))
    }

    /// Every stored snapshot, historical ones first
    pub fn snapshots(&self) -> impl Iterator<Item = &T> {
        self.history.values().chain(std::iter::once(&self.latest))
    }

    /// Find the generation whose snapshot governs `target`.
    ///
    /// An exact match wins. Otherwise the nearest recorded change at or after
    /// `target` governs it. When `target` postdates every recorded change the
    /// current rules apply and `Latest` is returned.
    pub fn resolve(&self, target: Generation) -> Generation {
        let Generation::Numbered(n) = target else {
            return Generation::Latest;
        };

        match self.history.range(n..).next() {
            Some((k, _)) => Generation::Numbered(*k),
            None => Generation::Latest,
        }
    }

    /// Snapshot governing `target`
    pub fn at(&self, target: Generation) -> &T {
        self.get(self.resolve(target)).unwrap_or(&self.latest)
    }

    /// Take the snapshot governing `target` out of the record
    pub fn into_at(mut self, target: Generation) -> T {
        match self.resolve(target) {
            Generation::Numbered(k) => self.history.remove(&k).unwrap_or(self.latest),
            Generation::Latest => self.latest,
        }
    }
}

impl<T: Clone> VersionedRecord<T> {
    /// Copy the newest historical snapshot over `Latest`, if there is one
    pub fn promote_newest(&mut self) {
        if let Some((_, newest)) = self.history.last_key_value() {
            self.latest = newest.clone();
        }
    }
}

impl<T: Default> Default for VersionedRecord<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
