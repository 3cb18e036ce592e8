//! Maximum Flow Algorithm Implementation
//!
//! This module implements Edmonds-Karp maximum flow: breadth-first search
//! for the fewest-edge augmenting path, repeated until the sink becomes
//! unreachable in the residual graph. Every augmentation pushes exactly one
//! unit, which is exact for the unit-capacity networks built by the dice
//! layer and still correct for any integral capacities.
//!
//! Residual capacities live behind the [`ResidualCapacity`] trait so the
//! solver runs unchanged over a dense `n x n` matrix or a sparse map keyed
//! by node pair.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::types::NodeId;

/// Flow capacity type; all capacities are non-negative integers
pub type Capacity = u32;

/// Flow value type
pub type Flow = u32;

/// Storage for the remaining capacity of every ordered node pair
pub trait ResidualCapacity: Clone + fmt::Debug {
    /// Creates an all-zero store for `node_count` nodes
    fn with_nodes(node_count: usize) -> Self;

    /// Number of nodes the store was created for
    fn node_count(&self) -> usize;

    /// Remaining capacity on the directed edge `from -> to`
    fn get(&self, from: NodeId, to: NodeId) -> Capacity;

    /// Overwrites the remaining capacity on `from -> to`
    fn set(&mut self, from: NodeId, to: NodeId, capacity: Capacity);

    /// Sends one unit along `from -> to`, crediting the reverse residual edge
    fn push_unit(&mut self, from: NodeId, to: NodeId) {
        let forward = self.get(from, to);
        debug_assert!(forward > 0, "push on saturated edge {} -> {}", from, to);
        self.set(from, to, forward - 1);
        let backward = self.get(to, from);
        self.set(to, from, backward + 1);
    }
}

/// Dense row-major capacity matrix, O(n^2) memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseCapacity {
    node_count: usize,
    cells: Vec<Capacity>,
}

impl DenseCapacity {
    #[inline]
    fn offset(&self, from: NodeId, to: NodeId) -> usize {
        from.as_usize() * self.node_count + to.as_usize()
    }
}

impl ResidualCapacity for DenseCapacity {
    fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            cells: vec![0; node_count * node_count],
        }
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    fn get(&self, from: NodeId, to: NodeId) -> Capacity {
        self.cells[self.offset(from, to)]
    }

    #[inline]
    fn set(&mut self, from: NodeId, to: NodeId, capacity: Capacity) {
        let offset = self.offset(from, to);
        self.cells[offset] = capacity;
    }
}

/// Sparse capacity map keyed by node pair; absent pairs have capacity 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseCapacity {
    node_count: usize,
    cells: HashMap<(NodeId, NodeId), Capacity>,
}

impl SparseCapacity {
    /// Number of node pairs currently holding an entry
    pub fn stored_pairs(&self) -> usize {
        self.cells.len()
    }
}

impl ResidualCapacity for SparseCapacity {
    fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            cells: HashMap::new(),
        }
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    fn get(&self, from: NodeId, to: NodeId) -> Capacity {
        self.cells.get(&(from, to)).copied().unwrap_or(0)
    }

    fn set(&mut self, from: NodeId, to: NodeId, capacity: Capacity) {
        debug_assert!(from.as_usize() < self.node_count && to.as_usize() < self.node_count);
        self.cells.insert((from, to), capacity);
    }
}

/// Capacity store selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityStorage {
    /// Dense matrix
    #[default]
    Dense,
    /// Map keyed by node pair
    Sparse,
}

impl FromStr for CapacityStorage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" | "matrix" => Ok(Self::Dense),
            "sparse" | "map" => Ok(Self::Sparse),
            other => Err(format!("unknown capacity storage '{}', expected dense or sparse", other)),
        }
    }
}

impl fmt::Display for CapacityStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => f.write_str("dense"),
            Self::Sparse => f.write_str("sparse"),
        }
    }
}

/// Flow network construction errors
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid vertex {vertex}: network has {vertex_count} vertices")]
    InvalidVertex { vertex: NodeId, vertex_count: usize },
    #[error("Source and sink must differ, both are {0}")]
    SourceIsSink(NodeId),
}

/// Flow network: residual capacities plus an adjacency list covering both
/// forward and potential residual edges
#[derive(Debug, Clone)]
pub struct FlowNetwork<C = DenseCapacity> {
    capacity: C,
    adjacency: Vec<Vec<NodeId>>,
    source: NodeId,
    sink: NodeId,
}

impl<C: ResidualCapacity> FlowNetwork<C> {
    /// Create an edgeless network with validated source and sink
    pub fn new(vertex_count: usize, source: NodeId, sink: NodeId) -> Result<Self, FlowError> {
        for vertex in [source, sink] {
            if vertex.as_usize() >= vertex_count {
                return Err(FlowError::InvalidVertex { vertex, vertex_count });
            }
        }
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }

        Ok(Self {
            capacity: C::with_nodes(vertex_count),
            adjacency: vec![Vec::new(); vertex_count],
            source,
            sink,
        })
    }

    /// Add a directed edge; both endpoints record each other so the reverse
    /// residual edge is reachable during search
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) {
        debug_assert!(from.as_usize() < self.vertex_count() && to.as_usize() < self.vertex_count());
        self.capacity.set(from, to, capacity);
        self.adjacency[from.as_usize()].push(to);
        self.adjacency[to.as_usize()].push(from);
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// Remaining capacity on `from -> to`
    pub fn residual(&self, from: NodeId, to: NodeId) -> Capacity {
        self.capacity.get(from, to)
    }

    pub fn capacities(&self) -> &C {
        &self.capacity
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node.as_usize()]
    }

    /// Number of directed edges added (reverse residual edges excluded)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Copy of the current capacities, taken before solving to recover flow later
    pub fn snapshot(&self) -> C {
        self.capacity.clone()
    }

    /// Checks `c[u][v] + c[v][u]` is unchanged from `original` for every adjacent pair
    pub fn conserves(&self, original: &C) -> bool {
        (0..self.vertex_count()).all(|u| {
            let u = NodeId(u);
            self.neighbors(u).iter().all(|&v| {
                self.capacity.get(u, v) + self.capacity.get(v, u)
                    == original.get(u, v) + original.get(v, u)
            })
        })
    }
}

/// Solver states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverPhase {
    /// Looking for the next augmenting path
    Searching,
    /// No augmenting path remains
    Done,
}

/// Flow algorithm performance metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowMetrics {
    /// Augmenting paths applied
    pub augmenting_paths: usize,
    /// Breadth-first searches run, including the final unsuccessful one
    pub bfs_rounds: usize,
    /// Nodes taken off the BFS queue across all rounds
    pub nodes_dequeued: usize,
}

/// Maximum flow result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowResult {
    /// Maximum flow value
    pub max_flow: Flow,
    /// Algorithm performance metrics
    pub metrics: FlowMetrics,
}

/// Edmonds-Karp maximum flow solver
#[derive(Debug, Clone)]
pub struct MaxFlowSolver {
    /// Stop each search as soon as the sink is labelled
    early_exit: bool,
}

impl Default for MaxFlowSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxFlowSolver {
    pub fn new() -> Self {
        Self { early_exit: true }
    }

    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    pub fn early_exit(&self) -> bool {
        self.early_exit
    }

    /// Run to completion, mutating the network's residual capacities in place.
    ///
    /// Terminates because every round either increases the flow by one or
    /// finds the sink unreachable, and the flow is bounded by the source's
    /// outgoing capacity.
    pub fn solve<C: ResidualCapacity>(&self, network: &mut FlowNetwork<C>) -> MaxFlowResult {
        let source = network.source;
        let sink = network.sink;
        let mut metrics = FlowMetrics::default();
        let mut flow: Flow = 0;
        let mut phase = SolverPhase::Searching;

        while phase == SolverPhase::Searching {
            match self.find_augmenting_path(network, &mut metrics) {
                None => phase = SolverPhase::Done,
                Some(parent) => {
                    let mut v = sink;
                    while v != source {
                        let u = parent[v.as_usize()].unwrap_or(source);
                        network.capacity.push_unit(u, v);
                        v = u;
                    }
                    flow += 1;
                    metrics.augmenting_paths += 1;
                    trace!("augmented to flow {}", flow);
                }
            }
        }

        debug!(
            "Edmonds-Karp finished: flow={} paths={} rounds={} dequeued={}",
            flow, metrics.augmenting_paths, metrics.bfs_rounds, metrics.nodes_dequeued
        );

        MaxFlowResult { max_flow: flow, metrics }
    }

    /// BFS over positive residual edges; returns the predecessor table when
    /// the sink is reachable
    fn find_augmenting_path<C: ResidualCapacity>(
        &self,
        network: &FlowNetwork<C>,
        metrics: &mut FlowMetrics,
    ) -> Option<Vec<Option<NodeId>>> {
        let source = network.source;
        let sink = network.sink;
        let mut parent: Vec<Option<NodeId>> = vec![None; network.vertex_count()];
        parent[source.as_usize()] = Some(source);

        let mut queue = VecDeque::new();
        queue.push_back(source);
        metrics.bfs_rounds += 1;

        'search: while let Some(u) = queue.pop_front() {
            metrics.nodes_dequeued += 1;
            for &v in network.neighbors(u) {
                if parent[v.as_usize()].is_none() && network.capacity.get(u, v) > 0 {
                    parent[v.as_usize()] = Some(u);
                    if v == sink && self.early_exit {
                        break 'search;
                    }
                    queue.push_back(v);
                }
            }
        }

        parent[sink.as_usize()].map(|_| parent)
    }
}
