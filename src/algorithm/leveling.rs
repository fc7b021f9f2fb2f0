use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{PrimInt, Signed};

use crate::algorithm::path::walk_back;
use crate::algorithm::traits::check_endpoints;
use crate::algorithm::{PathEngine, PathResult};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// General-weight engine in the Bellman-Ford family.
///
/// Works in two phases. First the subgraph reachable from the source is
/// ordered by levels: nodes with no remaining unprocessed predecessor are
/// peeled off round by round. A round that peels nothing proves the
/// remaining nodes contain a cycle; with general weights such a cycle makes
/// the distance undefined for every query it can feed, so those queries are
/// rejected. Second, one relaxation pass in level order computes the
/// distances. The level list is a topological order of the relevant
/// subgraph, so a single left-to-right pass suffices and no n-1 round
/// scheme is needed.
#[derive(Debug, Default)]
pub struct BellmanLeveling;

impl BellmanLeveling {
    /// Creates a new leveling engine instance
    pub fn new() -> Self {
        BellmanLeveling
    }
}

/// Nodes reachable from `start` by following arcs forward.
fn forward_reachable<W, G: Graph<W>>(graph: &G, start: NodeId) -> Vec<bool> {
    reachable(graph, start, |graph, from, to| graph.has_arc(from, to))
}

/// Nodes from which `end` can be reached.
fn backward_reachable<W, G: Graph<W>>(graph: &G, end: NodeId) -> Vec<bool> {
    reachable(graph, end, |graph, from, to| graph.has_arc(to, from))
}

fn reachable<W, G, F>(graph: &G, start: NodeId, connects: F) -> Vec<bool>
where
    G: Graph<W>,
    F: Fn(&G, NodeId, NodeId) -> bool,
{
    let mut seen = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for other in graph.nodes() {
            if !seen[other] && connects(graph, node, other) {
                seen[other] = true;
                queue.push_back(other);
            }
        }
    }

    seen
}

/// Distinct direct predecessors of every node inside the relevant subgraph.
///
/// `None` marks a node outside the subgraph (and later, a node already
/// levelled). Arcs from outside the subgraph are not recorded.
fn predecessor_sets<W, G: Graph<W>>(graph: &G, relevant: &[bool]) -> Vec<Option<HashSet<NodeId>>> {
    graph
        .nodes()
        .map(|succ| {
            if !relevant[succ] {
                return None;
            }
            Some(
                graph
                    .nodes()
                    .filter(|&pred| relevant[pred] && graph.has_arc(pred, succ))
                    .collect(),
            )
        })
        .collect()
}

/// Iteratively peels predecessor-free nodes into a level list.
///
/// Returns the list plus the stuck set: nodes left over when a round peels
/// nothing. A non-empty stuck set proves a cycle among those nodes.
fn level_order(preds: &mut [Option<HashSet<NodeId>>]) -> (Vec<NodeId>, Vec<NodeId>) {
    let mut levels = Vec::new();
    let mut remaining = preds.iter().filter(|set| set.is_some()).count();

    while remaining > 0 {
        let round: Vec<NodeId> = (0..preds.len())
            .filter(|&node| matches!(&preds[node], Some(set) if set.is_empty()))
            .collect();

        if round.is_empty() {
            let stuck = (0..preds.len()).filter(|&node| preds[node].is_some()).collect();
            return (levels, stuck);
        }

        for &node in &round {
            preds[node] = None;
            levels.push(node);
        }
        remaining -= round.len();

        // Strike the peeled nodes out of every remaining predecessor set
        for set in preds.iter_mut().flatten() {
            for node in &round {
                set.remove(node);
            }
        }
    }

    (levels, Vec::new())
}

impl<W, G> PathEngine<W, G> for BellmanLeveling
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BellmanLeveling"
    }

    /// Conservative whole-graph check: true iff the graph is acyclic, in
    /// which case every query is answerable. Individual queries only reject
    /// cycles they can actually see, so a query may still succeed on a
    /// graph where this returns false.
    fn is_applicable(&self, graph: &G) -> bool {
        let everything = vec![true; graph.node_count()];
        let mut preds = predecessor_sets(graph, &everything);
        let (_, stuck) = level_order(&mut preds);
        stuck.is_empty()
    }

    fn shortest_path(&self, graph: &G, source: NodeId, target: NodeId) -> Result<PathResult<W>> {
        check_endpoints(graph, source, target)?;

        // Phase 1: restrict to the subgraph reachable from the source and
        // order it by levels.
        let relevant = forward_reachable(graph, source);
        if !relevant[target] {
            return Err(Error::NoPath);
        }

        let mut preds = predecessor_sets(graph, &relevant);
        let (levels, stuck) = level_order(&mut preds);

        if !stuck.is_empty() {
            // The stuck nodes contain a cycle, and every one of them is
            // reachable from the source. The cycle only poisons the query
            // if some stuck node can also feed the target.
            let feeds_target = backward_reachable(graph, target);
            if stuck.iter().any(|&node| feeds_target[node]) {
                debug!(
                    "{} -> {}: cycle among {:?} reaches the target",
                    source, target, stuck
                );
                return Err(Error::AbsorbingCycle);
            }
            trace!("ignoring cycle away from the query: {:?}", stuck);
        }

        // Phase 2: one relaxation pass in level order. Earlier positions
        // are already final when read, so no further rounds are needed.
        let n = graph.node_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        distances[source] = Some(W::zero());

        for (position, &succ) in levels.iter().enumerate() {
            for &pred in &levels[..position] {
                if !graph.has_arc(pred, succ) {
                    continue;
                }
                let dist_pred = match distances[pred] {
                    Some(dist) => dist,
                    None => continue,
                };
                let candidate = dist_pred + graph.weight(pred, succ)?;
                let improves = match distances[succ] {
                    None => true,
                    Some(known) => candidate < known,
                };
                if improves {
                    trace!("relax {} -> {}: distance {:?}", pred, succ, candidate);
                    distances[succ] = Some(candidate);
                    predecessors[succ] = Some(pred);
                }
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
