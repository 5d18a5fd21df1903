//! Open and closed membership indices, keyed by node identity.
//!
//! `BTreeMap`/`BTreeSet` rather than hash containers, for deterministic
//! iteration order when sets are inspected or serialized.

use std::collections::{BTreeMap, BTreeSet};

/// Nodes discovered but not yet finalized, with the best general score known
/// for each.
///
/// This is the engine's only record of per-node cost. Neighbor values handed
/// out by the caller carry whatever scores the caller's store holds; the
/// engine compares against this index instead.
#[derive(Debug, Clone)]
pub struct OpenSet<I, S> {
    best: BTreeMap<I, S>,
}

impl<I: Ord, S: Copy> OpenSet<I, S> {
    /// An empty open set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            best: BTreeMap::new(),
        }
    }

    /// Whether `id` is open.
    #[must_use]
    pub fn contains(&self, id: &I) -> bool {
        self.best.contains_key(id)
    }

    /// Best general score recorded for `id`, if open.
    #[must_use]
    pub fn best_general(&self, id: &I) -> Option<S> {
        self.best.get(id).copied()
    }

    /// Record `id` as open with general score `general`.
    pub fn insert(&mut self, id: I, general: S) {
        self.best.insert(id, general);
    }

    /// Drop `id` from the open set, returning its best general score.
    pub fn remove(&mut self, id: &I) -> Option<S> {
        self.best.remove(id)
    }

    /// Number of open identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no identity is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Iterate `(id, best general score)` in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, S)> {
        self.best.iter().map(|(id, g)| (id, *g))
    }
}

impl<I: Ord, S: Copy> Default for OpenSet<I, S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finalized nodes. A closed node is never re-examined.
#[derive(Debug, Clone)]
pub struct ClosedSet<I> {
    ids: BTreeSet<I>,
}

impl<I: Ord> ClosedSet<I> {
    /// An empty closed set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Whether `id` has been expanded.
    #[must_use]
    pub fn contains(&self, id: &I) -> bool {
        self.ids.contains(id)
    }

    /// Returns `false` if `id` was already closed.
    pub fn insert(&mut self, id: I) -> bool {
        self.ids.insert(id)
    }

    /// Number of closed identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing has been closed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate closed identities in order.
    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.ids.iter()
    }
}

impl<I: Ord> Default for ClosedSet<I> {
    fn default() -> Self {
        Self::new()
    }
}
