//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures (inconsistent start/target,
//! invalid policy) and collaborator failures during a step. Ordinary run
//! endings, including frontier exhaustion and budget exhaustion, are
//! [`crate::search::Termination`] values and never errors.

use crate::contract::CallbackError;

/// The caller-supplied collaborator that failed during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStage {
    /// `SearchNode::cost_to` between the expanded node and a neighbor.
    CostTo,
    /// `SearchNode::estimate_to` while re-scoring a neighbor.
    Heuristic,
    /// `NeighborEnumerator::neighbors` for the expanded node.
    Enumerate,
    /// `SolutionVerifier::is_solution` on the frontier minimum.
    Verify,
}

impl std::fmt::Display for CallbackStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CostTo => "cost_to",
            Self::Heuristic => "heuristic",
            Self::Enumerate => "enumerate_neighbors",
            Self::Verify => "verify_solution",
        };
        f.write_str(name)
    }
}

/// Failure of a search run.
///
/// A collaborator failure is fatal to the run in progress: the engine moves
/// to [`crate::search::RunState::Failed`] and performs no recovery.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The start node cannot be scored against the target node.
    #[error("start and target nodes are inconsistent: {source}")]
    InvalidInput {
        #[source]
        source: CallbackError,
    },

    /// A caller-supplied function failed mid-step.
    #[error("{stage} callback failed: {source}")]
    Callback {
        stage: CallbackStage,
        #[source]
        source: CallbackError,
    },

    /// A run policy failed validation.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
