//! The 2-D coordinate graph world.
//!
//! [`XyGraph`] owns nodes and directed adjacency lists. The engine never sees
//! the graph itself: [`AdjacencyEnumerator`] borrows it and hands out node
//! values one neighbor at a time. Edge cost and heuristic are both Manhattan
//! distance, so the heuristic is admissible and consistent.

use std::collections::BTreeMap;

use pathwright_search::contract::{CallbackError, NeighborEnumerator};
use pathwright_search::node::SearchNode;
use pathwright_search::score::Scores;
use serde::{Deserialize, Serialize};

use crate::canon::{to_canonical_json_bytes, CanonError};
use crate::hash::{canonical_hash, ContentHash, DOMAIN_GRAPH};

/// Identity of a node in an [`XyGraph`].
pub type NodeId = u32;

/// Graph construction or lookup failure.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node {id} is not in the graph")]
    UnknownNode { id: NodeId },
    #[error("node {id} is defined more than once")]
    DuplicateNode { id: NodeId },
    #[error("node {from} lists neighbor {to}, which is not in the graph")]
    DanglingNeighbor { from: NodeId, to: NodeId },
    #[error("malformed graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A point on the integer plane.
///
/// `==` is structural and includes the scores. Search identity is
/// [`SearchNode::id`] alone; the engine keys its sets and maps by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyNode {
    id: NodeId,
    x: i64,
    y: i64,
    scores: Scores<i64>,
}

impl XyNode {
    /// A node at `(x, y)` with zeroed scores.
    #[must_use]
    pub fn new(id: NodeId, x: i64, y: i64) -> Self {
        Self {
            id,
            x,
            y,
            scores: Scores::default(),
        }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Manhattan distance, saturating on overflow.
    #[must_use]
    pub fn manhattan(&self, other: &Self) -> i64 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
            .try_into()
            .unwrap_or(i64::MAX)
    }
}

impl SearchNode for XyNode {
    type Id = NodeId;
    type Score = i64;

    fn id(&self) -> NodeId {
        self.id
    }

    fn scores(&self) -> &Scores<i64> {
        &self.scores
    }

    fn scores_mut(&mut self) -> &mut Scores<i64> {
        &mut self.scores
    }

    fn cost_to(&self, neighbor: &Self) -> Result<i64, CallbackError> {
        Ok(self.manhattan(neighbor))
    }

    fn estimate_to(&self, target: &Self, _general: i64) -> Result<i64, CallbackError> {
        Ok(self.manhattan(target))
    }
}

/// One node entry of the JSON graph document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub neighbors: Vec<NodeId>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    nodes: Vec<NodeRecord>,
}

/// Directed graph of [`XyNode`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XyGraph {
    nodes: BTreeMap<NodeId, XyNode>,
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl XyGraph {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no outgoing edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if `id` is already present.
    pub fn add_node(&mut self, id: NodeId, x: i64, y: i64) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        self.nodes.insert(id, XyNode::new(id, x, y));
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// Add the directed edge `from -> to`. Enumeration order follows
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `from` is absent and
    /// [`GraphError::DanglingNeighbor`] if `to` is absent.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::DanglingNeighbor { from, to });
        }
        self.adjacency
            .get_mut(&from)
            .ok_or(GraphError::UnknownNode { id: from })?
            .push(to);
        Ok(())
    }

    /// The node stored under `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&XyNode> {
        self.nodes.get(&id)
    }

    /// Like [`XyGraph::node`], as an error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `id` is absent.
    pub fn require(&self, id: NodeId) -> Result<&XyNode, GraphError> {
        self.node(id).ok_or(GraphError::UnknownNode { id })
    }

    /// Outgoing neighbor ids of `id`; empty for an unknown node.
    #[must_use]
    pub fn neighbor_ids(&self, id: NodeId) -> &[NodeId] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Node values in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &XyNode> {
        self.nodes.values()
    }

    /// Build a graph from a JSON document of the form
    /// `{"nodes": [{"id": 0, "x": 0, "y": 5, "neighbors": [1, 2]}, ...]}`.
    ///
    /// Nodes may reference neighbors defined later in the document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Json`] for malformed input, and
    /// [`GraphError::DuplicateNode`] or [`GraphError::DanglingNeighbor`] for
    /// an inconsistent document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, GraphError> {
        let doc: GraphDocument = serde_json::from_slice(bytes)?;
        Self::from_records(doc.nodes)
    }

    /// Build a graph from node records.
    ///
    /// # Errors
    ///
    /// See [`XyGraph::from_json_slice`].
    pub fn from_records(records: Vec<NodeRecord>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for record in &records {
            graph.add_node(record.id, record.x, record.y)?;
        }
        for record in records {
            for to in record.neighbors {
                graph.connect(record.id, to)?;
            }
        }
        Ok(graph)
    }

    /// The graph as node records, ascending by id.
    #[must_use]
    pub fn to_records(&self) -> Vec<NodeRecord> {
        self.nodes
            .values()
            .map(|node| NodeRecord {
                id: node.id,
                x: node.x,
                y: node.y,
                neighbors: self.neighbor_ids(node.id).to_vec(),
            })
            .collect()
    }

    /// Canonical JSON of the graph document.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        to_canonical_json_bytes(&GraphDocument {
            nodes: self.to_records(),
        })
    }

    /// Domain-separated digest of [`XyGraph::to_canonical_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(DOMAIN_GRAPH, &self.to_canonical_json_bytes()?))
    }

    /// The 13-node demonstration graph.
    ///
    /// From start 0 to target 12 the optimal path is `0 → 2 → 4 → 10 → 12`
    /// with cost 25. The competing route through 6 reaches 10 at cost 15 (via
    /// a zero-cost edge, since 6 and 10 share coordinates) and totals 27.
    #[must_use]
    pub fn sample() -> Self {
        const NODES: [(NodeId, i64, i64, &[NodeId]); 13] = [
            (0, 0, 5, &[1, 2]),
            (1, 3, 6, &[3]),
            (2, 4, 3, &[4, 5]),
            (3, 6, 9, &[6, 7]),
            (4, 7, 3, &[8, 10]),
            (5, 6, 1, &[8]),
            (6, 8, 6, &[7, 10]),
            (7, 11, 8, &[9]),
            (8, 10, 2, &[11]),
            (9, 13, 6, &[]),
            (10, 8, 6, &[12]),
            (11, 13, 0, &[]),
            (12, 17, 3, &[]),
        ];

        let mut graph = Self::new();
        for (id, x, y, neighbors) in NODES {
            graph.nodes.insert(id, XyNode::new(id, x, y));
            graph.adjacency.insert(id, neighbors.to_vec());
        }
        graph
    }
}

/// Enumerates neighbors out of a borrowed [`XyGraph`].
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyEnumerator<'g> {
    graph: &'g XyGraph,
}

impl<'g> AdjacencyEnumerator<'g> {
    /// Enumerate neighbors out of `graph`.
    #[must_use]
    pub fn new(graph: &'g XyGraph) -> Self {
        Self { graph }
    }

    /// The borrowed graph.
    #[must_use]
    pub fn graph(&self) -> &'g XyGraph {
        self.graph
    }
}

impl<'g> NeighborEnumerator<XyNode> for AdjacencyEnumerator<'g> {
    type Neighbors = Neighbors<'g>;

    fn neighbors(&mut self, node: &XyNode) -> Result<Neighbors<'g>, CallbackError> {
        let ids = self
            .graph
            .adjacency
            .get(&node.id)
            .ok_or_else(|| GraphError::UnknownNode { id: node.id })?;
        if let Some(&to) = ids.iter().find(|id| !self.graph.nodes.contains_key(id)) {
            return Err(GraphError::DanglingNeighbor { from: node.id, to }.into());
        }
        Ok(Neighbors {
            graph: self.graph,
            ids: ids.iter(),
        })
    }
}

/// Lazy iterator over one node's neighbors, yielding fresh node values.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    graph: &'g XyGraph,
    ids: std::slice::Iter<'g, NodeId>,
}

impl Iterator for Neighbors<'_> {
    type Item = XyNode;

    fn next(&mut self) -> Option<XyNode> {
        // `AdjacencyEnumerator::neighbors` rejected lists with missing ids.
        self.ids
            .by_ref()
            .find_map(|id| self.graph.nodes.get(id).cloned())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len()))
    }
}
