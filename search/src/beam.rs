//! Beam filters: admission policies that bound the frontier.
//!
//! A filter runs after a candidate neighbor has been re-scored and before it
//! is admitted. Returning `true` suppresses the candidate: it gets no
//! predecessor link, no open-set entry and no frontier snapshot.

use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::sets::OpenSet;
use crate::solution::SolutionMap;

/// View of the engine state handed to a beam filter.
///
/// Read access to the solution map, open set and frontier; the only mutation
/// offered is [`BeamContext::prune_frontier`], which keeps the open set
/// consistent with what it removes.
pub struct BeamContext<'a, N: SearchNode> {
    solution: &'a SolutionMap<N>,
    open: &'a mut OpenSet<N::Id, N::Score>,
    frontier: &'a mut Frontier<N>,
}

impl<'a, N: SearchNode> BeamContext<'a, N> {
    pub(crate) fn new(
        solution: &'a SolutionMap<N>,
        open: &'a mut OpenSet<N::Id, N::Score>,
        frontier: &'a mut Frontier<N>,
    ) -> Self {
        Self {
            solution,
            open,
            frontier,
        }
    }

    /// Predecessor links recorded so far.
    #[must_use]
    pub fn solution(&self) -> &SolutionMap<N> {
        self.solution
    }

    /// Open identities and their best general scores.
    #[must_use]
    pub fn open(&self) -> &OpenSet<N::Id, N::Score> {
        &*self.open
    }

    /// Current frontier, including stale copies.
    #[must_use]
    pub fn frontier(&self) -> &Frontier<N> {
        &*self.frontier
    }

    /// Keep the `max_size` best frontier entries.
    ///
    /// A pruned identity leaves the open set unless a snapshot carrying its
    /// best general score survives. Returns the pruned ids.
    pub fn prune_frontier(&mut self, max_size: usize) -> Vec<N::Id> {
        let pruned = self.frontier.prune_to(max_size);
        for id in &pruned {
            let live = self
                .open
                .best_general(id)
                .is_some_and(|g| self.frontier.contains_live(id, g));
            if !live {
                self.open.remove(id);
            }
        }
        pruned
    }
}

/// Admission policy for re-scored neighbors.
pub trait BeamFilter<N: SearchNode> {
    /// Return `true` to suppress `candidate`.
    fn reject(&mut self, candidate: &N, ctx: &mut BeamContext<'_, N>) -> bool;
}

impl<N, F> BeamFilter<N> for F
where
    N: SearchNode,
    F: FnMut(&N, &mut BeamContext<'_, N>) -> bool,
{
    fn reject(&mut self, candidate: &N, ctx: &mut BeamContext<'_, N>) -> bool {
        self(candidate, ctx)
    }
}

/// Plain A*: admits every candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBeam;

impl<N: SearchNode> BeamFilter<N> for NoBeam {
    fn reject(&mut self, _candidate: &N, _ctx: &mut BeamContext<'_, N>) -> bool {
        false
    }
}

/// Keeps at most `width` entries on the frontier.
///
/// Once the frontier is full, a candidate no better than the current worst
/// entry is rejected; a better one is admitted after pruning the frontier to
/// `width - 1`. A width of zero rejects everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamWidth {
    width: usize,
}

impl BeamWidth {
    /// A beam holding at most `width` frontier entries.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Configured frontier capacity.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<N: SearchNode> BeamFilter<N> for BeamWidth {
    fn reject(&mut self, candidate: &N, ctx: &mut BeamContext<'_, N>) -> bool {
        if self.width == 0 {
            return true;
        }
        if ctx.frontier().len() < self.width {
            return false;
        }
        match ctx.frontier().worst_total() {
            Some(worst) if candidate.total_score() >= worst => true,
            _ => {
                let pruned = ctx.prune_frontier(self.width - 1);
                tracing::trace!(
                    pruned = pruned.len(),
                    width = self.width,
                    "beam pruned frontier"
                );
                false
            }
        }
    }
}
