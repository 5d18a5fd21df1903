//! The node contract and the frontier ordering key.

use std::fmt::Debug;

use crate::contract::CallbackError;
use crate::score::{Score, Scores};

/// A node the engine can score, order and key by identity.
///
/// Identity (`id`) is independent of the scores: two values with the same id
/// and different scores are the same entry for set membership and for the
/// solution map.
///
/// Implementors supply the score storage and the two scoring functions; the
/// accessors for `g`, `h` and `f` are provided.
pub trait SearchNode: Clone {
    /// Stable identity used for open/closed membership and predecessor keys.
    type Id: Ord + Clone + Debug;
    /// Score type for `g`, `h` and `f`.
    type Score: Score;

    fn id(&self) -> Self::Id;

    fn scores(&self) -> &Scores<Self::Score>;

    fn scores_mut(&mut self) -> &mut Scores<Self::Score>;

    /// True edge cost from `self` to an adjacent node. Must be non-negative
    /// for the returned path to be optimal.
    ///
    /// # Errors
    ///
    /// Returns the caller's failure when the two nodes cannot be compared.
    fn cost_to(&self, neighbor: &Self) -> Result<Self::Score, CallbackError>;

    /// Heuristic estimate from `self` to `target`, given the cost `general`
    /// already paid to reach `self`. Must never overestimate for the
    /// returned path to be optimal.
    ///
    /// # Errors
    ///
    /// Returns the caller's failure when no estimate is defined.
    fn estimate_to(
        &self,
        target: &Self,
        general: Self::Score,
    ) -> Result<Self::Score, CallbackError>;

    fn general_score(&self) -> Self::Score {
        self.scores().general
    }

    fn heuristic_score(&self) -> Self::Score {
        self.scores().heuristic
    }

    fn total_score(&self) -> Self::Score {
        self.scores().total()
    }

    fn set_general_score(&mut self, value: Self::Score) {
        self.scores_mut().general = value;
    }

    /// Recompute `h` toward `target` from the node's current `g`.
    ///
    /// # Errors
    ///
    /// Propagates the failure of [`SearchNode::estimate_to`].
    fn update_heuristic(&mut self, target: &Self) -> Result<(), CallbackError> {
        let heuristic = self.estimate_to(target, self.general_score())?;
        self.scores_mut().heuristic = heuristic;
        Ok(())
    }
}

/// The frontier ordering key: `(total, id, creation_order)`.
///
/// Lower total first, then lower identity, then older insertion. The
/// identity tie-break makes the returned path deterministic among equal-cost
/// alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierKey<I, S> {
    pub total: S,
    pub id: I,
    pub creation_order: u64,
}

impl<I: Ord, S: Ord> PartialOrd for FrontierKey<I, S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Ord, S: Ord> Ord for FrontierKey<I, S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total
            .cmp(&other.total)
            .then_with(|| self.id.cmp(&other.id))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<I, S> FrontierKey<I, S> {
    /// Snapshot the key of `node` at insertion time.
    #[must_use]
    pub fn of<N>(node: &N, creation_order: u64) -> Self
    where
        N: SearchNode<Id = I, Score = S>,
    {
        Self {
            total: node.total_score(),
            id: node.id(),
            creation_order,
        }
    }
}
