use std::collections::HashMap;
use std::fmt;

use crate::graph::traits::{Graph, NodeId};
use crate::{Error, Result};

/// A directed graph stored as a dense adjacency matrix over labelled nodes.
///
/// The node set is fixed at construction; arcs are added afterwards and the
/// graph is read-only once the caller starts querying. Node ids are assigned
/// in label order, so iteration is deterministic.
#[derive(Debug, Clone)]
pub struct MatrixGraph<W> {
    /// Node labels in insertion order; the index is the node id
    labels: Vec<String>,

    /// Reverse label lookup: label -> node id
    ids: HashMap<String, NodeId>,

    /// Matrix cell `[from][to]` holds the arc weight, `None` when absent
    arcs: Vec<Vec<Option<W>>>,
}

impl<W> MatrixGraph<W>
where
    W: Copy,
{
    /// Creates a graph with the given node labels and no arcs.
    ///
    /// Fails with [`Error::DuplicateLabel`] when two labels collide.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let mut ids = HashMap::with_capacity(labels.len());
        let mut owned = Vec::with_capacity(labels.len());

        for (id, label) in labels.iter().enumerate() {
            let label = label.as_ref().to_owned();
            if ids.insert(label.clone(), id).is_some() {
                return Err(Error::DuplicateLabel(label));
            }
            owned.push(label);
        }

        let n = owned.len();
        Ok(MatrixGraph {
            labels: owned,
            ids,
            arcs: vec![vec![None; n]; n],
        })
    }

    /// Creates a graph from a node set and a list of `(from, to, weight)`
    /// triples.
    pub fn from_arcs<S: AsRef<str>>(labels: &[S], arcs: &[(&str, &str, W)]) -> Result<Self> {
        let mut graph = Self::new(labels)?;
        for &(from, to, weight) in arcs {
            graph.add_arc(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a directed arc between two labelled nodes.
    ///
    /// Re-adding an existing arc replaces its weight, keeping at most one
    /// arc per ordered pair. Fails with [`Error::UnknownLabel`] when either
    /// label is not part of the graph.
    pub fn add_arc(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        let from = self.require(from)?;
        let to = self.require(to)?;
        self.arcs[from][to] = Some(weight);
        Ok(())
    }

    /// Looks up the id of a labelled node
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// Returns the label of a node
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Returns the number of arcs in the graph
    pub fn arc_count(&self) -> usize {
        self.arcs
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Returns the number of successors of a node
    pub fn out_degree(&self, id: NodeId) -> Result<usize> {
        let row = self.arcs.get(id).ok_or(Error::UnknownNode(id))?;
        Ok(row.iter().filter(|cell| cell.is_some()).count())
    }

    /// Returns the number of predecessors of a node
    pub fn in_degree(&self, id: NodeId) -> Result<usize> {
        if id >= self.labels.len() {
            return Err(Error::UnknownNode(id));
        }
        Ok(self.arcs.iter().filter(|row| row[id].is_some()).count())
    }

    /// Renders a node sequence as labels joined by `" - "`, e.g. `"A - D - B"`
    pub fn format_path(&self, path: &[NodeId]) -> Result<String> {
        let labels = path
            .iter()
            .map(|&id| self.label(id).ok_or(Error::UnknownNode(id)))
            .collect::<Result<Vec<_>>>()?;
        Ok(labels.join(" - "))
    }

    fn require(&self, label: &str) -> Result<NodeId> {
        self.node_id(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_owned()))
    }
}

impl<W> Graph<W> for MatrixGraph<W>
where
    W: Copy,
{
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(0..self.labels.len())
    }

    fn has_arc(&self, from: NodeId, to: NodeId) -> bool {
        self.arcs
            .get(from)
            .and_then(|row| row.get(to))
            .map_or(false, |cell| cell.is_some())
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Result<W> {
        self.arcs
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .flatten()
            .ok_or(Error::InvalidArc(from, to))
    }
}

impl<W> fmt::Display for MatrixGraph<W>
where
    W: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, label) in self.labels.iter().enumerate() {
            write!(f, "{} ->", label)?;
            for (to, cell) in self.arcs[from].iter().enumerate() {
                if let Some(weight) = cell {
                    write!(f, " {}({})", self.labels[to], weight)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
