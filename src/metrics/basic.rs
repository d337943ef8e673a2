//! A few standard metrics, enough to drive the caching and composition
//! machinery.

use crate::{
    algorithms::geodesic::geodesic_distances,
    graphs::graph::Graph,
    metrics::metric::{GlobalMetric, NodeMetric},
};

/// Number of edge endpoints at a node.
#[derive(Debug, Clone, Copy, Default)]
pub struct Degree;

impl NodeMetric for Degree {
    type Value = usize;

    fn name(&self) -> &str {
        "degree"
    }

    fn apply<G: Graph>(&self, graph: &G, node: G::Node) -> usize {
        graph.degree(node)
    }
}

/// Inverse mean distance to every node reachable from the node.
///
/// 0 for a node that reaches nothing. Intended for connected graphs; use
/// [`apply_to_components`](crate::metrics::apply_to_components) otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Closeness;

impl NodeMetric for Closeness {
    type Value = f64;

    fn name(&self) -> &str {
        "closeness"
    }

    fn apply<G: Graph>(&self, graph: &G, node: G::Node) -> f64 {
        let distances = geodesic_distances(graph, node);
        let total: usize = distances.values().sum();
        if total == 0 {
            0.0
        } else {
            (distances.len() - 1) as f64 / total as f64
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NodeCount;

impl GlobalMetric for NodeCount {
    type Value = usize;

    fn name(&self) -> &str {
        "node count"
    }

    fn apply<G: Graph>(&self, graph: &G) -> usize {
        graph.node_count()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCount;

impl GlobalMetric for EdgeCount {
    type Value = usize;

    fn name(&self) -> &str {
        "edge count"
    }

    fn apply<G: Graph>(&self, graph: &G) -> usize {
        graph.edge_count()
    }
}

/// Edges present over edges possible, ignoring loops. 0 below two nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Density;

impl GlobalMetric for Density {
    type Value = f64;

    fn name(&self) -> &str {
        "density"
    }

    fn apply<G: Graph>(&self, graph: &G) -> f64 {
        let n = graph.node_count();
        if n < 2 {
            return 0.0;
        }
        let pairs = (n * (n - 1)) as f64;
        let edges = graph.edge_count() as f64;
        if graph.is_directed() {
            edges / pairs
        } else {
            2.0 * edges / pairs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::factory::create_graph;

    #[test]
    fn closeness_on_path() {
        // 0 - 1 - 2: the middle is one step from both ends
        let g = create_graph(false, 0..3u8, [(0, 1), (1, 2)]).unwrap();

        assert_eq!(Closeness.apply(&g, 1), 1.0);
        assert!((Closeness.apply(&g, 0) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn closeness_of_isolate_is_zero() {
        let g = create_graph(false, 0..2u8, []).unwrap();
        assert_eq!(Closeness.apply(&g, 0), 0.0);
    }

    #[test]
    fn global_counts_and_density() {
        let undirected = create_graph(false, 0..4u8, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(NodeCount.apply(&undirected), 4);
        assert_eq!(EdgeCount.apply(&undirected), 3);
        assert!((Density.apply(&undirected) - 0.5).abs() < 1e-12);

        let directed = create_graph(true, 0..3u8, [(0, 1), (1, 0), (1, 2)]).unwrap();
        assert!((Density.apply(&directed) - 0.5).abs() < 1e-12);

        let single = create_graph(false, [0u8], []).unwrap();
        assert_eq!(Density.apply(&single), 0.0);
    }
}
