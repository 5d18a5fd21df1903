//! Pathwright Search: incremental A* over caller-owned implicit graphs.
//!
//! The engine never stores or builds a graph. The caller supplies a node type
//! with cost and heuristic functions, a neighbor enumerator, a goal verifier
//! and optionally a beam filter; the engine owns only the frontier, the
//! open/closed indices and the predecessor map.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathwright_search  ←  pathwright_harness
//! (engine, frontier)     (XY graph world, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`]: identity, scores, cost and heuristic
//! - [`Frontier`]: min-ordered multiset of node snapshots
//! - [`SolutionMap`]: identity → predecessor links
//! - [`BeamFilter`]: admission policy bounding the frontier
//! - [`AStar`]: the stepwise engine
//! - [`SearchPolicy`]: step budget and beam width

#![forbid(unsafe_code)]

pub mod beam;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod score;
pub mod search;
pub mod sets;
pub mod solution;

#[cfg(test)]
mod test_support;

pub use beam::{BeamContext, BeamFilter, BeamWidth, NoBeam};
pub use contract::{CallbackError, MatchId, NeighborEnumerator, SolutionVerifier};
pub use error::{CallbackStage, SearchError};
pub use frontier::Frontier;
pub use node::{FrontierKey, SearchNode};
pub use policy::SearchPolicy;
pub use score::{Score, Scores};
pub use search::{AStar, RunState, SearchStats, Termination};
pub use sets::{ClosedSet, OpenSet};
pub use solution::{reconstruct_path, SolutionMap};
