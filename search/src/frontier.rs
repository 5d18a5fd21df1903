//! Min-ordered frontier of node snapshots.
//!
//! Nodes are copied in at admission time. A node whose cost later improves is
//! pushed again rather than mutated in place, so the frontier is a multiset
//! that may hold stale copies of one identity. The engine discards stale
//! copies when they reach the top.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, SearchNode};

/// One snapshot plus the key it was admitted under. The key is reversed so
/// the max-heap surfaces the lowest total.
#[derive(Debug)]
struct FrontierEntry<N: SearchNode> {
    key: Reverse<FrontierKey<N::Id, N::Score>>,
    node: N,
}

impl<N: SearchNode> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N: SearchNode> Eq for FrontierEntry<N> {}

impl<N: SearchNode> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: SearchNode> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier over node snapshots.
///
/// Insertion order is stamped into each key as the last tie-breaker. The
/// largest size ever reached is tracked for run statistics.
pub struct Frontier<N: SearchNode> {
    heap: BinaryHeap<FrontierEntry<N>>,
    next_creation_order: u64,
    high_water: usize,
}

impl<N: SearchNode> Frontier<N> {
    /// An empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Push a snapshot of `node`. Duplicate identities are allowed.
    pub fn push(&mut self, node: N) {
        let key = FrontierKey::of(&node, self.next_creation_order);
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// The lowest-total node, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&N> {
        self.heap.peek().map(|e| &e.node)
    }

    /// Remove and return the lowest-total node.
    pub fn pop(&mut self) -> Option<N> {
        self.heap.pop().map(|e| e.node)
    }

    /// Number of entries, stale copies included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Iterate over the snapshots in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.heap.iter().map(|e| &e.node)
    }

    /// The highest total score currently held.
    #[must_use]
    pub fn worst_total(&self) -> Option<N::Score> {
        self.heap.iter().map(|e| e.key.0.total).max()
    }

    /// Whether a snapshot of `id` with general score `general` is present.
    #[must_use]
    pub fn contains_live(&self, id: &N::Id, general: N::Score) -> bool {
        self.heap
            .iter()
            .any(|e| e.key.0.id == *id && e.node.general_score() == general)
    }

    /// Prune the frontier to at most `max_size` entries.
    ///
    /// Keeps the best entries by key ordering and returns the ids of the
    /// pruned snapshots, best first.
    pub fn prune_to(&mut self, max_size: usize) -> Vec<N::Id> {
        if self.heap.len() <= max_size {
            return Vec::new();
        }

        // into_sorted_vec is ascending by Reverse<key>, i.e. worst first.
        let mut entries = std::mem::take(&mut self.heap).into_sorted_vec();
        entries.reverse();

        let pruned_ids: Vec<N::Id> = entries[max_size..]
            .iter()
            .map(|e| e.key.0.id.clone())
            .collect();

        entries.truncate(max_size);
        self.heap = entries.into_iter().collect();

        pruned_ids
    }
}

impl<N: SearchNode> Default for Frontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: SearchNode + std::fmt::Debug> std::fmt::Debug for Frontier<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.heap.len())
            .field("high_water", &self.high_water)
            .field("top", &self.peek())
            .finish()
    }
}
