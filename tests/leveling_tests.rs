use parcours::{
    shortest_path, Algorithm, BellmanLeveling, Dijkstra, Error, MatrixGraph, PathEngine,
    PathResult,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Same fixtures as the Dijkstra tests: the nine-node exercise graph has a
// B <-> G cycle, the seven-node graph is acyclic with one negative arc.
fn exercise_graph() -> MatrixGraph<i64> {
    MatrixGraph::from_arcs(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I"],
        &[
            ("A", "C", 2),
            ("A", "D", 1),
            ("B", "G", 3),
            ("C", "H", 2),
            ("D", "B", 3),
            ("D", "C", 5),
            ("D", "E", 3),
            ("E", "C", 1),
            ("E", "G", 3),
            ("E", "H", 7),
            ("G", "B", 2),
            ("G", "F", 1),
            ("H", "F", 4),
            ("H", "G", 2),
            ("I", "H", 10),
        ],
    )
    .unwrap()
}

fn negative_graph() -> MatrixGraph<i64> {
    MatrixGraph::from_arcs(
        &["A", "B", "C", "D", "E", "F", "G"],
        &[
            ("A", "B", 7),
            ("A", "C", 1),
            ("B", "D", 4),
            ("B", "E", 2),
            ("B", "F", -3),
            ("C", "B", 5),
            ("C", "E", 2),
            ("C", "F", 7),
            ("D", "G", 4),
            ("E", "G", 10),
            ("F", "E", 3),
        ],
    )
    .unwrap()
}

fn leveling(graph: &MatrixGraph<i64>, from: &str, to: &str) -> Result<PathResult<i64>, Error> {
    let source = graph.node_id(from).unwrap();
    let target = graph.node_id(to).unwrap();
    BellmanLeveling::new().shortest_path(graph, source, target)
}

fn assert_route(graph: &MatrixGraph<i64>, from: &str, to: &str, rendered: &str, distance: i64) {
    let found = leveling(graph, from, to).unwrap();
    assert_eq!(graph.format_path(&found.path).unwrap(), rendered);
    assert_eq!(found.distance, distance);
}

#[test]
fn applicability_depends_on_cycles() {
    let engine = BellmanLeveling::new();
    assert!(engine.is_applicable(&negative_graph()));
    assert!(!engine.is_applicable(&exercise_graph()));
}

#[test]
fn routes_through_negative_arcs() {
    init_logs();
    let g = negative_graph();

    assert_route(&g, "A", "B", "A - C - B", 6);
    assert_route(&g, "A", "C", "A - C", 1);
    assert_route(&g, "A", "D", "A - C - B - D", 10);
    assert_route(&g, "A", "E", "A - C - E", 3);
    assert_route(&g, "A", "F", "A - C - B - F", 3);
    assert_route(&g, "A", "G", "A - C - E - G", 13);
}

#[test]
fn rejects_cycles_that_feed_the_target() {
    let g = exercise_graph();

    for target in ["B", "F", "G"] {
        assert_eq!(leveling(&g, "A", target), Err(Error::AbsorbingCycle));
    }
}

#[test]
fn ignores_cycles_away_from_the_query() {
    let g = exercise_graph();

    // The B <-> G cycle cannot feed C, E or H, so those queries still
    // have well-defined distances.
    assert_route(&g, "A", "C", "A - C", 2);
    assert_route(&g, "A", "E", "A - D - E", 4);
    assert_route(&g, "A", "H", "A - C - H", 4);
}

#[test]
fn rejects_cycles_through_the_source() {
    let g = MatrixGraph::from_arcs(
        &["X", "Y", "Z"],
        &[("X", "Y", 1), ("Y", "X", 1), ("X", "Z", 4)],
    )
    .unwrap();

    assert_eq!(leveling(&g, "X", "Z"), Err(Error::AbsorbingCycle));
    assert_eq!(leveling(&g, "X", "X"), Err(Error::AbsorbingCycle));
}

#[test]
fn rejects_cycle_upstream_of_target() {
    let g = MatrixGraph::from_arcs(
        &["S", "C1", "C2", "T"],
        &[("S", "C1", 1), ("C1", "C2", 1), ("C2", "C1", 1), ("C2", "T", 1)],
    )
    .unwrap();

    assert_eq!(leveling(&g, "S", "T"), Err(Error::AbsorbingCycle));
}

#[test]
fn ignores_side_cycle_off_the_route() {
    let g = MatrixGraph::from_arcs(
        &["S", "T", "C1", "C2"],
        &[("S", "T", 5), ("S", "C1", 1), ("C1", "C2", 1), ("C2", "C1", 1)],
    )
    .unwrap();

    let found = leveling(&g, "S", "T").unwrap();
    assert_eq!(found.distance, 5);
    assert_eq!(g.format_path(&found.path).unwrap(), "S - T");
}

#[test]
fn reports_unreachable_targets() {
    let g = exercise_graph();

    assert_eq!(leveling(&g, "A", "I"), Err(Error::NoPath));
    assert_eq!(leveling(&g, "C", "A"), Err(Error::NoPath));
}

#[test]
fn self_query_is_trivial() {
    let g = negative_graph();
    let found = leveling(&g, "D", "D").unwrap();
    assert_eq!(found.distance, 0);
    assert_eq!(g.format_path(&found.path).unwrap(), "D");
}

#[test]
fn agrees_with_dijkstra_where_both_apply() {
    let g = exercise_graph();

    // Queries the cycle cannot see are answerable by both engines.
    for target in ["C", "D", "E", "H"] {
        let source = g.node_id("A").unwrap();
        let target = g.node_id(target).unwrap();
        let greedy = Dijkstra::new().shortest_path(&g, source, target).unwrap();
        let levelled = BellmanLeveling::new()
            .shortest_path(&g, source, target)
            .unwrap();
        assert_eq!(greedy.distance, levelled.distance);
    }
}

#[test]
fn dispatch_entry_selects_the_engine() {
    let g = negative_graph();
    let source = g.node_id("A").unwrap();
    let target = g.node_id("F").unwrap();

    assert_eq!(
        shortest_path(&g, source, target, Algorithm::Dijkstra),
        Err(Error::NegativeWeight(
            g.node_id("B").unwrap(),
            g.node_id("F").unwrap()
        ))
    );

    let found = shortest_path(&g, source, target, Algorithm::BellmanLeveling).unwrap();
    assert_eq!(found.distance, 3);
    assert_eq!(g.format_path(&found.path).unwrap(), "A - C - B - F");
}
