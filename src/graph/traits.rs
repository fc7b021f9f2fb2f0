use crate::Result;

/// Identifier of a node within one graph.
///
/// Ids are dense indices in `0..node_count`, assigned in construction order
/// and stable for the graph's lifetime.
pub type NodeId = usize;

/// Read-only view of a directed weighted graph.
///
/// Every operation is a pure read; the graph never changes while a query
/// runs. Each ordered node pair carries at most one arc.
pub trait Graph<W> {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node ids, ascending.
    ///
    /// The sequence is finite, restartable, and identical on every call;
    /// the engines rely on this order for deterministic tie-breaking.
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns true if there is a direct arc between the two nodes
    fn has_arc(&self, from: NodeId, to: NodeId) -> bool;

    /// Returns the weight of the arc from `from` to `to`.
    ///
    /// Querying a pair without an arc is a precondition violation and fails
    /// with [`Error::InvalidArc`](crate::Error::InvalidArc).
    fn weight(&self, from: NodeId, to: NodeId) -> Result<W>;
}
