//! Parcours - Point-to-point shortest paths on directed weighted graphs
//!
//! This library answers one `(source, target)` query at a time over a small
//! directed graph with integer arc weights, using one of two interchangeable
//! engines:
//!
//! - [`Dijkstra`]: greedy relaxation; requires every arc weight to be
//!   non-negative.
//! - [`BellmanLeveling`]: tolerates negative weights by relaxing in
//!   topological level order, and rejects queries whose relevant subgraph
//!   contains a cycle (an absorbing circuit makes the distance undefined).
//!
//! Graphs are built once, queried read-only, and discarded. All working
//! state lives inside a single engine invocation.
//!
//! ```
//! use parcours::{shortest_path, Algorithm, MatrixGraph};
//!
//! let mut g = MatrixGraph::new(&["A", "B", "C"]).unwrap();
//! g.add_arc("A", "B", 1).unwrap();
//! g.add_arc("B", "C", 2).unwrap();
//! g.add_arc("A", "C", 9).unwrap();
//!
//! let found = shortest_path(&g, 0, 2, Algorithm::Dijkstra).unwrap();
//! assert_eq!(found.distance, 3);
//! assert_eq!(g.format_path(&found.path).unwrap(), "A - B - C");
//! ```

use std::fmt::Debug;

use num_traits::{PrimInt, Signed};

pub mod algorithm;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, leveling::BellmanLeveling, PathEngine, PathResult};
/// Re-export main types for convenient use
pub use graph::matrix::MatrixGraph;
pub use graph::{Graph, NodeId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown node id: {0}")]
    UnknownNode(NodeId),

    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    #[error("Duplicate node label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid arc: no arc from {0} to {1}")]
    InvalidArc(NodeId, NodeId),

    #[error("Negative arc weight on {0} -> {1}")]
    NegativeWeight(NodeId, NodeId),

    #[error("Absorbing cycle on a path relevant to the query")]
    AbsorbingCycle,

    #[error("No path from source to target")]
    NoPath,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Selects which engine answers a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Greedy relaxation, non-negative weights only
    Dijkstra,
    /// Level-order relaxation, general weights, rejects relevant cycles
    BellmanLeveling,
}

/// Computes the shortest path from `source` to `target` with the chosen
/// engine.
///
/// Callers that want to probe an engine's precondition first can use
/// [`PathEngine::is_applicable`] and switch engines on failure; this entry
/// point re-validates in any case.
pub fn shortest_path<W, G>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    algorithm: Algorithm,
) -> Result<PathResult<W>>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    match algorithm {
        Algorithm::Dijkstra => Dijkstra::new().shortest_path(graph, source, target),
        Algorithm::BellmanLeveling => BellmanLeveling::new().shortest_path(graph, source, target),
    }
}
