//! Predecessor-walk path reconstruction.

use crate::graph::NodeId;
use crate::{Error, Result};

/// Walks a predecessor map from `target` back to `source` and returns the
/// ordered node sequence, source first.
///
/// A broken chain (a node without a predecessor before the source is
/// reached, or a walk longer than the map itself, which implies a
/// predecessor loop) means the engine's own termination proof was wrong;
/// the walk fails with [`Error::NoPath`] instead of returning a malformed
/// path.
pub fn walk_back(
    predecessors: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> Result<Vec<NodeId>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors.get(current).copied().flatten() {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => return Err(Error::NoPath),
        }

        if path.len() > predecessors.len() {
            debug_assert!(false, "predecessor loop through node {}", current);
            return Err(Error::NoPath);
        }
    }

    path.reverse();
    Ok(path)
}
