//! Graph algorithms: maximum flow and bipartite matching recovery

pub mod max_flow;
pub mod matching;

pub use self::matching::{recover_matching, BipartiteMatching};
pub use self::max_flow::{
    Capacity, CapacityStorage, DenseCapacity, Flow, FlowError, FlowMetrics, FlowNetwork,
    MaxFlowResult, MaxFlowSolver, ResidualCapacity, SolverPhase, SparseCapacity,
};
