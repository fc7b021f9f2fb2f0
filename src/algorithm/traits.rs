use std::fmt::Debug;

use num_traits::{PrimInt, Signed};

use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Outcome of one successful point-to-point query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<W> {
    /// Accumulated weight of the returned path
    pub distance: W,

    /// Node sequence from source to target, both included
    pub path: Vec<NodeId>,
}

/// A point-to-point shortest path engine.
///
/// Engines are stateless; every invocation allocates its own distance and
/// predecessor maps and discards them on return, so one graph can serve
/// any number of queries.
pub trait PathEngine<W, G>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    /// Get the name of the engine
    fn name(&self) -> &'static str;

    /// Returns true if the engine's precondition holds for this graph.
    ///
    /// Callers may probe this before searching to pick an engine; the
    /// engine re-validates on its own in [`PathEngine::shortest_path`].
    fn is_applicable(&self, graph: &G) -> bool;

    /// Computes the shortest path from `source` to `target`.
    ///
    /// When `source == target` the trivial path (distance zero, a single
    /// node) is returned without searching.
    fn shortest_path(&self, graph: &G, source: NodeId, target: NodeId) -> Result<PathResult<W>>;
}

/// Rejects query endpoints that are not part of the graph.
pub(crate) fn check_endpoints<W, G: Graph<W>>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<()> {
    for id in [source, target] {
        if id >= graph.node_count() {
            return Err(Error::UnknownNode(id));
        }
    }
    Ok(())
}
