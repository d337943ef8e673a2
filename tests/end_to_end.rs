use gravel::{
    DegreeClass, Graph, GraphComponents, GraphStats, IterativeGraphLayoutState, NodeSet,
    OptimizedGraph, Point, SpringLayout, algorithms, create_graph,
    metrics::{AdditiveSubsetMetric, SubsetMetric, apply_to_components, basic::Closeness},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

fn set(nodes: &[char]) -> NodeSet<char> {
    nodes.iter().copied().collect()
}

#[test]
fn path_with_isolate() {
    // A - B - C, D isolated
    let g = create_graph(false, ['A', 'B', 'C', 'D'], [('A', 'B'), ('B', 'C')]).unwrap();

    assert_eq!(
        algorithms::components(&g),
        vec![set(&['A', 'B', 'C']), set(&['D'])]
    );

    let optimized = OptimizedGraph::new(&g).unwrap();
    assert_eq!(optimized.class_of('A'), Some(DegreeClass::Leaf));
    assert_eq!(optimized.class_of('C'), Some(DegreeClass::Leaf));
    assert_eq!(optimized.class_of('B'), Some(DegreeClass::Connector));
    assert_eq!(optimized.class_of('D'), Some(DegreeClass::Isolate));

    assert_eq!(algorithms::geodesic_distance(&g, 'A', 'C'), 2);
    assert_eq!(algorithms::geodesic_distance(&g, 'A', 'D'), -1);

    let tree = algorithms::geodesic_tree(&g, 'A', 1);
    let expected: FxHashMap<char, usize> = [('A', 0), ('B', 1)].into_iter().collect();
    assert_eq!(tree, expected);

    assert_eq!(
        gravel::graphs::graph::describe(&g),
        "NODES: ['A', 'B', 'C', 'D']  EDGES: ['A'-'B', 'B'-'C']"
    );
}

#[test]
fn metrics_over_components() {
    let g = create_graph(false, ['A', 'B', 'C', 'D'], [('A', 'B'), ('B', 'C')]).unwrap();

    let components = GraphComponents::new(&g);
    assert!(!components.is_connected());

    let closeness = apply_to_components(&g, &Closeness);
    assert_eq!(closeness[&'D'], 0.0);
    assert!((closeness[&'B'] - 0.75).abs() < 1e-12);

    let mut stats = GraphStats::new(&g);
    let summary = *stats.node_stats(&Closeness).summary();
    assert_eq!(summary.count, 4);
    assert_eq!(summary.max, 1.0);

    let additive = AdditiveSubsetMetric::new(Closeness);
    let total = additive.apply(&g, &set(&['A', 'B'])).unwrap();
    assert!((total - (2.0 / 3.0 + 1.0)).abs() < 1e-12);
}

#[test]
fn storage_strategies_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let n = 120u32;
    let edges: Vec<(u32, u32)> = (0..400)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect();

    for directed in [false, true] {
        let sparse = gravel::sparse_graph(directed, 0..n, edges.clone()).unwrap();
        let matrix = gravel::matrix_graph(directed, 0..n, edges.clone()).unwrap();

        assert_eq!(sparse.edge_count(), matrix.edge_count());
        for v in 0..n {
            assert_eq!(sparse.degree(v), matrix.degree(v));
            assert_eq!(sparse.neighbors(v), matrix.neighbors(v));
        }
        assert_eq!(
            algorithms::components(&sparse),
            algorithms::components(&matrix)
        );
    }
}

#[test]
fn layout_request_then_sync() {
    let g = create_graph(false, 0..4u32, [(0, 1), (1, 2), (2, 3)]).unwrap();
    let state = IterativeGraphLayoutState::default();
    let layout = SpringLayout::default();

    for _ in 0..10 {
        state.iterate(&g, &layout);
    }

    let requested: FxHashMap<u32, Point> =
        [(0, Point::new(1.0, 2.0)), (3, Point::new(-5.0, 0.5))].into_iter().collect();
    state.request_positions(requested.clone(), false);
    let all: NodeSet<u32> = g.nodes().collect();
    state.node_location_sync(&all);

    let positions = state.positions_copy();
    let velocities = state.velocities_copy();
    for (node, point) in &requested {
        assert_eq!(positions[node], *point);
        assert_eq!(velocities[node], Point::ORIGIN);
    }
    assert_eq!(positions.len(), 4);
}
