//! Harness runner: drives the engine over an [`XyGraph`] under a policy.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → resolve start/target
//!   → AStar::new / AStar::with_beam(BeamWidth)
//!   → run(max_steps) → SearchReport → digest
//! ```

use pathwright_search::beam::{BeamFilter, BeamWidth};
use pathwright_search::contract::MatchId;
use pathwright_search::error::SearchError;
use pathwright_search::policy::SearchPolicy;
use pathwright_search::search::AStar;
use tracing::debug;

use crate::canon::CanonError;
use crate::graph::{AdjacencyEnumerator, GraphError, NodeId, XyGraph, XyNode};
use crate::hash::ContentHash;
use crate::report::SearchReport;

/// Error during a harness run.
///
/// Runs that end without a path are not errors; they are reports with
/// `termination` other than `solved`.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Canon(#[from] CanonError),
}

type Engine<'g, B> = AStar<XyNode, AdjacencyEnumerator<'g>, MatchId<NodeId>, B>;

/// Search `graph` from `start` to `target` under `policy`.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an invalid policy or a failed run, and
/// [`RunError::Graph`] if `start` or `target` is not in the graph.
pub fn run_search(
    graph: &XyGraph,
    start: NodeId,
    target: NodeId,
    policy: &SearchPolicy,
) -> Result<SearchReport, RunError> {
    policy.validate()?;
    let start_node = graph.require(start)?.clone();
    let target_node = graph.require(target)?.clone();
    let enumerator = AdjacencyEnumerator::new(graph);
    let verifier = MatchId(target);

    match policy.beam_width {
        None => {
            let engine = AStar::new(start_node, target_node, verifier, enumerator)?;
            drive(engine, start, target, policy)
        }
        Some(width) => {
            let beam = BeamWidth::new(width);
            let engine = AStar::with_beam(start_node, target_node, verifier, enumerator, beam)?;
            drive(engine, start, target, policy)
        }
    }
}

/// [`run_search`], plus the report digest.
///
/// # Errors
///
/// See [`run_search`]; additionally [`RunError::Canon`] if the report cannot
/// be canonicalized.
pub fn run_search_with_digest(
    graph: &XyGraph,
    start: NodeId,
    target: NodeId,
    policy: &SearchPolicy,
) -> Result<(SearchReport, ContentHash), RunError> {
    let report = run_search(graph, start, target, policy)?;
    let digest = report.digest()?;
    Ok((report, digest))
}

fn drive<B: BeamFilter<XyNode>>(
    mut engine: Engine<'_, B>,
    start: NodeId,
    target: NodeId,
    policy: &SearchPolicy,
) -> Result<SearchReport, RunError> {
    let termination = engine.run(policy.max_steps)?;
    let stats = engine.stats();
    debug!(
        start,
        target,
        %termination,
        steps = stats.steps,
        expansions = stats.expansions,
        "harness run finished"
    );

    Ok(SearchReport {
        start,
        target,
        policy: policy.clone(),
        termination,
        path: engine.path(),
        cost: engine.solution_cost(),
        stats,
    })
}
