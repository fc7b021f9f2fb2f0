use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{PrimInt, Signed};

use crate::algorithm::path::walk_back;
use crate::algorithm::traits::check_endpoints;
use crate::algorithm::{PathEngine, PathResult};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Greedy single-source engine for graphs without negative arc weights.
///
/// Runs the classic relaxation loop with full node rescans instead of a
/// priority queue, O(n²) per query. The graphs this crate targets are
/// small, so the simpler loop wins over decrease-key bookkeeping.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Returns the first negative arc in iteration order, if any.
fn negative_arc<W, G>(graph: &G) -> Option<(NodeId, NodeId)>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    for from in graph.nodes() {
        for to in graph.nodes() {
            if graph.has_arc(from, to)
                && matches!(graph.weight(from, to), Ok(w) if w.is_negative())
            {
                return Some((from, to));
            }
        }
    }
    None
}

impl<W, G> PathEngine<W, G> for Dijkstra
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn is_applicable(&self, graph: &G) -> bool {
        negative_arc(graph).is_none()
    }

    fn shortest_path(&self, graph: &G, source: NodeId, target: NodeId) -> Result<PathResult<W>> {
        check_endpoints(graph, source, target)?;

        if let Some((from, to)) = negative_arc(graph) {
            return Err(Error::NegativeWeight(from, to));
        }

        let n = graph.node_count();

        // Working maps live for this invocation only. A node's distance is
        // None until reached; the finalized mask marks distances proven
        // optimal and excluded from further relaxation.
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        let mut finalized = vec![false; n];

        distances[source] = Some(W::zero());
        let mut current = source;

        while !finalized[target] {
            let dist_current = distances[current].ok_or(Error::NoPath)?;

            // Relax every successor of the current node
            for succ in graph.nodes() {
                if finalized[succ] || !graph.has_arc(current, succ) {
                    continue;
                }
                let candidate = dist_current + graph.weight(current, succ)?;
                let improves = match distances[succ] {
                    None => true,
                    Some(known) => candidate < known,
                };
                if improves {
                    trace!("relax {} -> {}: distance {:?}", current, succ, candidate);
                    distances[succ] = Some(candidate);
                    predecessors[succ] = Some(current);
                }
            }
            finalized[current] = true;

            if finalized[target] {
                break;
            }

            // Next current: the unfinalized reached node with the smallest
            // tentative distance. Ties go to the first such node in
            // iteration order.
            let mut next: Option<(NodeId, W)> = None;
            for candidate in graph.nodes() {
                if finalized[candidate] {
                    continue;
                }
                if let Some(dist) = distances[candidate] {
                    if next.map_or(true, |(_, best)| dist < best) {
                        next = Some((candidate, dist));
                    }
                }
            }

            match next {
                Some((node, _)) => current = node,
                None => return Err(Error::NoPath),
            }
        }

        let distance = distances[target].ok_or(Error::NoPath)?;
        let path = walk_back(&predecessors, source, target)?;
        debug!(
            "{} -> {}: distance {:?} over {} nodes",
            source,
            target,
            distance,
            path.len()
        );

        Ok(PathResult { distance, path })
    }
}
