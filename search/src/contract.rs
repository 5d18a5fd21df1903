//! Collaborator contracts: neighbor enumeration and goal verification.
//!
//! Both are supplied by the caller, who owns the graph. The engine holds the
//! collaborators, calls them once per step, and never inspects the graph
//! directly.

use crate::node::SearchNode;

/// Error type returned by caller-supplied functions.
///
/// The engine does not interpret these; it wraps them in
/// [`crate::error::SearchError`] and ends the run.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Produces the adjacent nodes of a node.
///
/// # Contract
///
/// - Called once per expansion; each call starts a fresh sequence.
/// - The sequence must be finite.
/// - Yielded values are copies: the engine re-scores them freely and never
///   writes back into the caller's store.
pub trait NeighborEnumerator<N> {
    /// The neighbor sequence. May be lazy.
    type Neighbors: IntoIterator<Item = N>;

    /// Enumerate the neighbors of `node`.
    ///
    /// # Errors
    ///
    /// Returns the caller's failure, e.g. a dangling adjacency reference.
    fn neighbors(&mut self, node: &N) -> Result<Self::Neighbors, CallbackError>;
}

impl<N, F, I> NeighborEnumerator<N> for F
where
    F: FnMut(&N) -> Result<I, CallbackError>,
    I: IntoIterator<Item = N>,
{
    type Neighbors = I;

    fn neighbors(&mut self, node: &N) -> Result<I, CallbackError> {
        self(node)
    }
}

/// Decides whether a node is the goal.
pub trait SolutionVerifier<N> {
    /// # Errors
    ///
    /// Returns the caller's failure if the goal test cannot be evaluated.
    fn is_solution(&self, node: &N) -> Result<bool, CallbackError>;
}

impl<N, F> SolutionVerifier<N> for F
where
    F: Fn(&N) -> Result<bool, CallbackError>,
{
    fn is_solution(&self, node: &N) -> Result<bool, CallbackError> {
        self(node)
    }
}

/// Accepts exactly the node whose identity equals the wrapped id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchId<I>(pub I);

impl<N: SearchNode> SolutionVerifier<N> for MatchId<N::Id> {
    fn is_solution(&self, node: &N) -> Result<bool, CallbackError> {
        Ok(node.id() == self.0)
    }
}
