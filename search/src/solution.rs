//! Predecessor links and path reconstruction.

use std::collections::BTreeMap;

use crate::node::SearchNode;

/// Identity → best-known predecessor node.
///
/// An entry exists iff the node has been admitted at least once; it is
/// overwritten whenever a strictly cheaper path is admitted. The start node
/// never has an entry, which is what terminates a backward walk.
#[derive(Debug, Clone)]
pub struct SolutionMap<N: SearchNode> {
    predecessors: BTreeMap<N::Id, N>,
}

impl<N: SearchNode> SolutionMap<N> {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            predecessors: BTreeMap::new(),
        }
    }

    /// Set `predecessor` as the way into `id`, replacing any earlier link.
    pub fn record(&mut self, id: N::Id, predecessor: N) {
        self.predecessors.insert(id, predecessor);
    }

    /// The node recorded as the way into `id`.
    #[must_use]
    pub fn predecessor(&self, id: &N::Id) -> Option<&N> {
        self.predecessors.get(id)
    }

    /// Whether `id` has a predecessor.
    #[must_use]
    pub fn contains(&self, id: &N::Id) -> bool {
        self.predecessors.contains_key(id)
    }

    /// Number of identities with a predecessor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    /// Whether nothing has been relaxed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Iterate `(id, predecessor)` in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (&N::Id, &N)> {
        self.predecessors.iter()
    }

    /// Identity path from the start node to `target`, inclusive.
    ///
    /// If `target` was never reached the result is `[target]` alone; check
    /// the engine's `has_solution` before trusting the path.
    #[must_use]
    pub fn path_to(&self, target: &N::Id) -> Vec<N::Id> {
        let mut path = vec![target.clone()];
        let mut current = target.clone();

        // Links always point at nodes closed earlier, so the walk ends.
        while let Some(prev) = self.predecessors.get(&current) {
            current = prev.id();
            path.push(current.clone());
        }

        path.reverse();
        path
    }
}

impl<N: SearchNode> Default for SolutionMap<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct the identity path from the start node to `target`.
#[must_use]
pub fn reconstruct_path<N: SearchNode>(solution: &SolutionMap<N>, target: &N::Id) -> Vec<N::Id> {
    solution.path_to(target)
}
