//! Random graph generation, mainly for tests and benchmarks.

use rand::prelude::*;

use crate::graph::MatrixGraph;

/// Generates a random directed acyclic graph with `n` nodes.
///
/// Arcs only run from lower to higher ids, so the result is acyclic by
/// construction. Each eligible pair gets an arc with probability
/// `arc_probability`, weighted uniformly in `min_weight..=max_weight`
/// (negative weights are allowed).
pub fn random_dag(
    n: usize,
    arc_probability: f64,
    min_weight: i64,
    max_weight: i64,
) -> MatrixGraph<i64> {
    assert!(n > 0, "n must be positive");
    assert!(min_weight <= max_weight, "empty weight range");

    let mut rng = rand::thread_rng();
    let mut graph = empty_graph(n);

    for from in 0..n {
        for to in (from + 1)..n {
            if rng.gen_bool(arc_probability) {
                let weight = rng.gen_range(min_weight..=max_weight);
                add_arc_by_index(&mut graph, from, to, weight);
            }
        }
    }

    graph
}

/// Generates a random directed graph with `n` nodes and non-negative
/// weights in `0..=max_weight`.
///
/// Arcs may run in any direction and form cycles; self-loops are excluded.
pub fn random_non_negative(n: usize, arc_probability: f64, max_weight: i64) -> MatrixGraph<i64> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight >= 0, "max_weight must be non-negative");

    let mut rng = rand::thread_rng();
    let mut graph = empty_graph(n);

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(arc_probability) {
                let weight = rng.gen_range(0..=max_weight);
                add_arc_by_index(&mut graph, from, to, weight);
            }
        }
    }

    graph
}

fn empty_graph(n: usize) -> MatrixGraph<i64> {
    let labels: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
    MatrixGraph::new(&labels).expect("generated labels are unique")
}

fn add_arc_by_index(graph: &mut MatrixGraph<i64>, from: usize, to: usize, weight: i64) {
    let from = format!("n{}", from);
    let to = format!("n{}", to);
    graph
        .add_arc(&from, &to, weight)
        .expect("generated labels exist in the graph");
}
