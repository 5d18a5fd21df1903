//! The stepwise A* engine.
//!
//! One [`AStar`] value is one run. Construction seeds the start node; each
//! [`AStar::step`] examines the lowest-total frontier node and either ends the
//! run or expands it. The caller decides when (and whether) to step again,
//! which is how budgets and cancellation are expressed.
//!
//! # Step
//!
//! ```text
//! discard stale top entries → peek → verify
//!   → pop, open → closed → enumerate neighbors
//!   → [skip closed → relax → re-score → beam filter → admit] × N
//! ```

use tracing::{debug, trace};

use crate::beam::{BeamContext, BeamFilter, NoBeam};
use crate::contract::{CallbackError, NeighborEnumerator, SolutionVerifier};
use crate::error::{CallbackStage, SearchError};
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::score::Score;
use crate::sets::{ClosedSet, OpenSet};
use crate::solution::SolutionMap;

/// Lifecycle of a run. Every state other than `Running` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// More steps may follow.
    Running,
    /// The verifier accepted the current node.
    Solved,
    /// The frontier emptied before the verifier accepted any node.
    Exhausted,
    /// A collaborator failed; the run is abandoned.
    Failed,
}

/// Why [`AStar::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal node was found.
    Solved,
    /// Frontier emptied without finding a goal.
    Exhausted,
    /// The step budget ran out; the run can be resumed.
    StepBudgetExceeded,
    /// An earlier step returned a collaborator error.
    Aborted,
}

impl Termination {
    /// Stable snake-case name used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::StepBudgetExceeded => "step_budget_exceeded",
            Self::Aborted => "aborted",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Steps that examined a frontier node.
    pub steps: u64,
    /// Nodes moved to the closed set.
    pub expansions: u64,
    /// Neighbors whose score was set or lowered.
    pub relaxations: u64,
    /// Relaxed neighbors suppressed by the beam filter.
    pub beam_rejections: u64,
    /// Outdated frontier copies dropped before a peek.
    pub stale_discards: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: usize,
}

/// Incremental A* search over a caller-owned implicit graph.
pub struct AStar<N, E, V, B = NoBeam>
where
    N: SearchNode,
{
    verifier: V,
    beam: B,
    enumerator: E,
    frontier: Frontier<N>,
    open: OpenSet<N::Id, N::Score>,
    closed: ClosedSet<N::Id>,
    solution: SolutionMap<N>,
    current: Option<N>,
    target: N,
    state: RunState,
    stats: SearchStats,
}

impl<N, E, V> AStar<N, E, V, NoBeam>
where
    N: SearchNode,
    E: NeighborEnumerator<N>,
    V: SolutionVerifier<N>,
{
    /// Start a plain A* run from `start` toward `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] if `start` cannot be scored
    /// against `target`.
    pub fn new(start: N, target: N, verifier: V, enumerator: E) -> Result<Self, SearchError> {
        AStar::with_beam(start, target, verifier, enumerator, NoBeam)
    }
}

impl<N, E, V, B> AStar<N, E, V, B>
where
    N: SearchNode,
    E: NeighborEnumerator<N>,
    V: SolutionVerifier<N>,
    B: BeamFilter<N>,
{
    /// Start a run whose admissions pass through `beam`.
    ///
    /// The start node gets `g = 0` and its heuristic toward `target`, and is
    /// seeded into the frontier and open set. No relaxation happens yet.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] if `start` cannot be scored
    /// against `target`.
    pub fn with_beam(
        mut start: N,
        target: N,
        verifier: V,
        enumerator: E,
        beam: B,
    ) -> Result<Self, SearchError> {
        start.set_general_score(<N::Score as Score>::zero());
        start
            .update_heuristic(&target)
            .map_err(|source| SearchError::InvalidInput { source })?;

        debug!(
            start = ?start.id(),
            target = ?target.id(),
            heuristic = ?start.heuristic_score(),
            "search initialized"
        );

        let mut open = OpenSet::new();
        open.insert(start.id(), start.general_score());
        let mut frontier = Frontier::new();
        frontier.push(start);

        Ok(Self {
            verifier,
            beam,
            enumerator,
            frontier,
            open,
            closed: ClosedSet::new(),
            solution: SolutionMap::new(),
            current: None,
            target,
            state: RunState::Running,
            stats: SearchStats::default(),
        })
    }

    /// Advance the search by one node.
    ///
    /// Returns `Ok(true)` if the caller should step again and `Ok(false)` once
    /// the run is over; check [`AStar::has_solution`] to tell success from
    /// exhaustion. Terminal states are sticky: later calls return `Ok(false)`
    /// without invoking any collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Callback`] if the verifier, enumerator, cost or
    /// heuristic function fails. The run moves to [`RunState::Failed`].
    pub fn step(&mut self) -> Result<bool, SearchError> {
        if self.state != RunState::Running {
            return Ok(false);
        }

        self.discard_stale();

        let Some(top) = self.frontier.peek() else {
            self.state = RunState::Exhausted;
            debug!(
                steps = self.stats.steps,
                closed = self.closed.len(),
                "frontier exhausted without a solution"
            );
            return Ok(false);
        };
        let current = top.clone();
        self.stats.steps += 1;
        self.current = Some(current.clone());

        let solved = match self.verifier.is_solution(&current) {
            Ok(solved) => solved,
            Err(source) => return Err(self.fail(CallbackStage::Verify, source)),
        };
        if solved {
            self.state = RunState::Solved;
            debug!(
                node = ?current.id(),
                cost = ?current.general_score(),
                steps = self.stats.steps,
                "solution found"
            );
            return Ok(false);
        }

        let id = current.id();
        debug!(
            node = ?id,
            general = ?current.general_score(),
            total = ?current.total_score(),
            step = self.stats.steps,
            "expanding node"
        );
        self.frontier.pop();
        self.open.remove(&id);
        self.closed.insert(id);
        self.stats.expansions += 1;

        self.expand(&current)?;
        Ok(true)
    }

    /// Step until the run ends or `max_steps` steps have been taken.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`AStar::step`].
    pub fn run(&mut self, max_steps: u64) -> Result<Termination, SearchError> {
        for _ in 0..max_steps {
            if !self.step()? {
                break;
            }
        }
        Ok(self.termination())
    }

    /// The run outcome as of now.
    #[must_use]
    pub fn termination(&self) -> Termination {
        match self.state {
            RunState::Running => Termination::StepBudgetExceeded,
            RunState::Solved => Termination::Solved,
            RunState::Exhausted => Termination::Exhausted,
            RunState::Failed => Termination::Aborted,
        }
    }

    /// Relax every non-closed neighbor of `current`.
    fn expand(&mut self, current: &N) -> Result<(), SearchError> {
        let neighbors = match self.enumerator.neighbors(current) {
            Ok(neighbors) => neighbors,
            Err(source) => return Err(self.fail(CallbackStage::Enumerate, source)),
        };

        for mut neighbor in neighbors {
            let id = neighbor.id();
            if self.closed.contains(&id) {
                continue;
            }

            let edge = match current.cost_to(&neighbor) {
                Ok(edge) => edge,
                Err(source) => return Err(self.fail(CallbackStage::CostTo, source)),
            };
            let tentative = current.general_score().add_cost(edge);
            let known = self.open.best_general(&id);
            if known.is_some_and(|g| tentative >= g) {
                continue;
            }

            neighbor.set_general_score(tentative);
            if let Err(source) = neighbor.update_heuristic(&self.target) {
                return Err(self.fail(CallbackStage::Heuristic, source));
            }
            self.stats.relaxations += 1;

            let mut ctx = BeamContext::new(&self.solution, &mut self.open, &mut self.frontier);
            if self.beam.reject(&neighbor, &mut ctx) {
                self.stats.beam_rejections += 1;
                trace!(node = ?id, total = ?neighbor.total_score(), "beam rejected neighbor");
                continue;
            }

            trace!(
                node = ?id,
                from = ?current.id(),
                general = ?tentative,
                heuristic = ?neighbor.heuristic_score(),
                is_new = known.is_none(),
                "admitted neighbor"
            );
            self.solution.record(id.clone(), current.clone());
            self.open.insert(id, tentative);
            self.frontier.push(neighbor);
        }

        Ok(())
    }

    /// Pop frontier tops that are closed or superseded by a cheaper copy.
    fn discard_stale(&mut self) {
        while let Some(top) = self.frontier.peek() {
            let id = top.id();
            let live = !self.closed.contains(&id)
                && self.open.best_general(&id) == Some(top.general_score());
            if live {
                break;
            }
            self.frontier.pop();
            self.stats.stale_discards += 1;
        }
    }

    fn fail(&mut self, stage: CallbackStage, source: CallbackError) -> SearchError {
        self.state = RunState::Failed;
        debug!(%stage, error = %source, "collaborator failed; run abandoned");
        SearchError::Callback { stage, source }
    }

    /// Current lifecycle state of the run.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the verifier accepted a node.
    #[must_use]
    pub fn has_solution(&self) -> bool {
        self.state == RunState::Solved
    }

    /// The predecessor map.
    #[must_use]
    pub fn solution(&self) -> &SolutionMap<N> {
        &self.solution
    }

    /// Identity path from start to the accepted node, if solved.
    ///
    /// Walks from the node the verifier accepted, which is the target node
    /// unless the verifier accepts something else.
    #[must_use]
    pub fn path(&self) -> Option<Vec<N::Id>> {
        if !self.has_solution() {
            return None;
        }
        self.current
            .as_ref()
            .map(|node| self.solution.path_to(&node.id()))
    }

    /// Cost of the path to the accepted node, if solved.
    #[must_use]
    pub fn solution_cost(&self) -> Option<N::Score> {
        if !self.has_solution() {
            return None;
        }
        self.current.as_ref().map(|node| node.general_score())
    }

    /// The node examined by the most recent step.
    #[must_use]
    pub fn current_node(&self) -> Option<&N> {
        self.current.as_ref()
    }

    /// The target every heuristic is estimated toward.
    #[must_use]
    pub fn target(&self) -> &N {
        &self.target
    }

    /// The configured solution verifier.
    #[must_use]
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// The configured beam filter.
    #[must_use]
    pub fn beam_filter(&self) -> &B {
        &self.beam
    }

    /// The configured neighbor enumerator.
    #[must_use]
    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// Frontier of admitted node snapshots.
    #[must_use]
    pub fn frontier(&self) -> &Frontier<N> {
        &self.frontier
    }

    /// Open identities and their best general scores.
    #[must_use]
    pub fn open_set(&self) -> &OpenSet<N::Id, N::Score> {
        &self.open
    }

    /// Identities expanded so far.
    #[must_use]
    pub fn closed_set(&self) -> &ClosedSet<N::Id> {
        &self.closed
    }

    /// Counters for the run so far, with the frontier high-water mark.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            frontier_high_water: self.frontier.high_water(),
            ..self.stats
        }
    }
}
