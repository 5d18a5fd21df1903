//! Shared fixtures for unit tests: nodes on a number line.

use std::collections::BTreeMap;

use crate::contract::{CallbackError, NeighborEnumerator};
use crate::node::SearchNode;
use crate::score::Scores;

/// A node at integer position `pos`. Edge cost and heuristic are both the
/// absolute position difference, so the heuristic is admissible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineNode {
    pub id: u32,
    pub pos: i64,
    /// Scoring against a poisoned node fails.
    pub poisoned: bool,
    /// Estimates toward a blind target are zero (Dijkstra order).
    pub blind: bool,
    /// Reachable at a normal edge cost, but has no estimate toward any target.
    pub unestimable: bool,
    scores: Scores<i64>,
}

impl LineNode {
    pub fn new(id: u32, pos: i64) -> Self {
        Self {
            id,
            pos,
            poisoned: false,
            blind: false,
            unestimable: false,
            scores: Scores::default(),
        }
    }

    pub fn poisoned(id: u32, pos: i64) -> Self {
        Self {
            poisoned: true,
            ..Self::new(id, pos)
        }
    }

    pub fn blind(id: u32, pos: i64) -> Self {
        Self {
            blind: true,
            ..Self::new(id, pos)
        }
    }

    pub fn unestimable(id: u32, pos: i64) -> Self {
        Self {
            unestimable: true,
            ..Self::new(id, pos)
        }
    }
}

impl SearchNode for LineNode {
    type Id = u32;
    type Score = i64;

    fn id(&self) -> u32 {
        self.id
    }

    fn scores(&self) -> &Scores<i64> {
        &self.scores
    }

    fn scores_mut(&mut self) -> &mut Scores<i64> {
        &mut self.scores
    }

    fn cost_to(&self, neighbor: &Self) -> Result<i64, CallbackError> {
        if neighbor.poisoned {
            return Err(format!("no edge cost into poisoned node {}", neighbor.id).into());
        }
        Ok((self.pos - neighbor.pos).abs())
    }

    fn estimate_to(&self, target: &Self, _general: i64) -> Result<i64, CallbackError> {
        if self.poisoned || target.poisoned {
            return Err(format!("undefined distance from {} to {}", self.id, target.id).into());
        }
        if self.unestimable {
            return Err("no estimate".into());
        }
        if target.blind {
            return Ok(0);
        }
        Ok((self.pos - target.pos).abs())
    }
}

/// Directed graph over `LineNode`s; the caller-owned store.
#[derive(Debug, Default)]
pub(crate) struct LineGraph {
    nodes: BTreeMap<u32, LineNode>,
    edges: BTreeMap<u32, Vec<u32>>,
}

impl LineGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: LineNode) -> Self {
        self.nodes.insert(node.id, node);
        self
    }

    pub fn with_edge(mut self, from: u32, to: u32) -> Self {
        self.edges.entry(from).or_default().push(to);
        self
    }

    pub fn node(&self, id: u32) -> LineNode {
        self.nodes[&id].clone()
    }

    /// A unit-cost chain `0 -> 1 -> ... -> n-1` at positions `0..n`.
    pub fn chain(n: u32) -> Self {
        let mut graph = Self::new();
        for id in 0..n {
            graph = graph.with_node(LineNode::new(id, i64::from(id)));
            if id + 1 < n {
                graph = graph.with_edge(id, id + 1);
            }
        }
        graph
    }
}

/// Enumerates neighbors out of a borrowed `LineGraph` and records each call.
pub(crate) struct LineEnumerator<'g> {
    graph: &'g LineGraph,
    pub expanded: Vec<u32>,
}

impl<'g> LineEnumerator<'g> {
    pub fn new(graph: &'g LineGraph) -> Self {
        Self {
            graph,
            expanded: Vec::new(),
        }
    }
}

impl NeighborEnumerator<LineNode> for LineEnumerator<'_> {
    type Neighbors = Vec<LineNode>;

    fn neighbors(&mut self, node: &LineNode) -> Result<Vec<LineNode>, CallbackError> {
        self.expanded.push(node.id);
        let Some(targets) = self.graph.edges.get(&node.id) else {
            return Ok(Vec::new());
        };
        targets
            .iter()
            .map(|id| {
                self.graph
                    .nodes
                    .get(id)
                    .cloned()
                    .ok_or_else(|| format!("dangling edge {} -> {id}", node.id).into())
            })
            .collect()
    }
}
