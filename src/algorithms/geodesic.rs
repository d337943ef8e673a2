use rustc_hash::FxHashMap;

use crate::graphs::{
    bfs::NodeBfs,
    frontier::{Frontier, LayeredFrontier},
    graph::{Graph, NodeSet},
    visited::Visited,
};

/// Distances from `start` to every node within `max_distance` steps.
///
/// Nodes beyond the bound or unreachable are absent. An absent start gives
/// an empty map. Follows successors on directed graphs.
pub fn geodesic_tree<G: Graph>(
    graph: &G,
    start: G::Node,
    max_distance: usize,
) -> FxHashMap<G::Node, usize> {
    let mut tree = FxHashMap::default();
    let mut bfs = NodeBfs::new(graph, [start]);
    while bfs.depth() <= max_distance {
        let depth = bfs.depth();
        let Some(layer) = bfs.next() else {
            break;
        };
        tree.extend(layer.into_iter().map(|n| (n, depth)));
    }
    tree
}

/// Unbounded [`geodesic_tree`].
pub fn geodesic_distances<G: Graph>(graph: &G, start: G::Node) -> FxHashMap<G::Node, usize> {
    geodesic_tree(graph, start, usize::MAX)
}

/// Nodes within `radius` steps of `node`, the node itself included.
pub fn neighborhood<G: Graph>(graph: &G, node: G::Node, radius: usize) -> NodeSet<G::Node> {
    geodesic_tree(graph, node, radius).into_keys().collect()
}

/// Length of a shortest path from `from` to `to`.
///
/// Returns `0` when the two are equal and `-1` when `to` cannot be reached.
/// The search stops as soon as `to` is discovered.
pub fn geodesic_distance<G: Graph>(graph: &G, from: G::Node, to: G::Node) -> isize {
    if from == to {
        return 0;
    }
    if !graph.contains(from) || !graph.contains(to) {
        return -1;
    }

    let mut visited = NodeSet::default();
    visited.visit(from);
    let mut frontier = LayeredFrontier::new([from]);

    loop {
        let mut found = false;
        let stepped = frontier.step(|current, next| {
            'expand: for &node in current {
                for successor in graph.out_neighbors(node) {
                    if successor == to {
                        found = true;
                        break 'expand;
                    }
                    if visited.visit(successor) {
                        next.push(successor);
                    }
                }
            }
        });
        if stepped.is_none() {
            return -1;
        }
        if found {
            // the step that found `to` handed out the layer one closer
            return frontier.depth() as isize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::factory::{create_graph, sparse_graph};

    use proptest::prelude::*;

    #[test]
    fn bounded_tree_on_path() {
        let g = create_graph(false, ['A', 'B', 'C', 'D'], [('A', 'B'), ('B', 'C')]).unwrap();

        let tree = geodesic_tree(&g, 'A', 1);
        let expected: FxHashMap<char, usize> = [('A', 0), ('B', 1)].into_iter().collect();
        assert_eq!(tree, expected);

        let all = geodesic_distances(&g, 'A');
        assert_eq!(all.get(&'C'), Some(&2));
        assert!(!all.contains_key(&'D'));
    }

    #[test]
    fn zero_radius_is_the_start() {
        let g = create_graph(false, 0..3u8, [(0, 1), (1, 2)]).unwrap();
        let expected: NodeSet<u8> = [1].into_iter().collect();
        assert_eq!(neighborhood(&g, 1, 0), expected);
        assert_eq!(neighborhood(&g, 1, 1).len(), 3);
        assert!(geodesic_tree(&g, 9, 3).is_empty());
    }

    #[test]
    fn distance_edge_cases() {
        // directed 0 -> 1 -> 2, 3 isolated
        let g = create_graph(true, 0..4u8, [(0, 1), (1, 2)]).unwrap();

        assert_eq!(geodesic_distance(&g, 0, 0), 0);
        assert_eq!(geodesic_distance(&g, 0, 2), 2);
        assert_eq!(geodesic_distance(&g, 2, 0), -1, "edges are ordered");
        assert_eq!(geodesic_distance(&g, 0, 3), -1);
        assert_eq!(geodesic_distance(&g, 0, 42), -1);
    }

    #[test]
    fn long_path_distance() {
        let n = 500u32;
        let edges: Vec<(u32, u32)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let g = sparse_graph(false, 0..n, edges).unwrap();

        assert_eq!(geodesic_distance(&g, 0, n - 1), (n - 1) as isize);
        assert_eq!(geodesic_distance(&g, 250, 10), 240);
    }

    proptest! {
        #[test]
        fn prop_distance_matches_tree_and_is_symmetric(
            edges in prop::collection::vec((0u8..15, 0u8..15), 0..40),
            a in 0u8..15,
            b in 0u8..15,
        ) {
            let g = create_graph(false, 0u8..15, edges).unwrap();
            let tree = geodesic_distances(&g, a);
            let expected = tree.get(&b).map_or(-1, |&d| d as isize);

            prop_assert_eq!(geodesic_distance(&g, a, b), expected);
            prop_assert_eq!(geodesic_distance(&g, a, b), geodesic_distance(&g, b, a));
        }
    }
}
