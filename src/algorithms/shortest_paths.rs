use rustc_hash::FxHashMap;

use crate::graphs::{
    frontier::{Frontier, LayeredFrontier},
    graph::{Graph, Node},
};

/// Single-source shortest-path bookkeeping produced by
/// [`breadth_first_search`].
///
/// Unreached nodes report distance `-1` and path count `0`.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    start: N,
    distances: FxHashMap<N, isize>,
    path_counts: FxHashMap<N, u64>,
    predecessors: FxHashMap<N, Vec<N>>,
    stack: Vec<N>,
}

impl<N: Node> ShortestPaths<N> {
    pub fn start(&self) -> N {
        self.start
    }

    /// Edge count of a shortest path from the start, or `-1`.
    pub fn distance(&self, node: N) -> isize {
        self.distances.get(&node).copied().unwrap_or(-1)
    }

    /// Number of distinct shortest paths from the start. Saturates at
    /// `u64::MAX`.
    pub fn path_count(&self, node: N) -> u64 {
        self.path_counts.get(&node).copied().unwrap_or(0)
    }

    /// Nodes directly before `node` on some shortest path.
    pub fn predecessors(&self, node: N) -> &[N] {
        self.predecessors
            .get(&node)
            .map_or(<&[N]>::default(), Vec::as_slice)
    }

    /// Reached nodes in non-increasing distance, start last.
    ///
    /// This is the order in which dependency accumulation walks the
    /// shortest-path DAG.
    pub fn stack(&self) -> &[N] {
        &self.stack
    }

    pub fn reached_count(&self) -> usize {
        self.stack.len()
    }

    /// Reached nodes with their distance, in no particular order.
    pub fn distances(&self) -> impl Iterator<Item = (N, usize)> + '_ {
        self.distances.iter().map(|(&n, &d)| (n, d.unsigned_abs()))
    }
}

/// Breadth-first search from `start` recording distances, shortest-path
/// counts, predecessor lists and the finish-order stack in one pass.
///
/// Follows successors on directed graphs. An absent start reaches nothing.
pub fn breadth_first_search<G: Graph>(graph: &G, start: G::Node) -> ShortestPaths<G::Node> {
    let mut distances = FxHashMap::default();
    let mut path_counts = FxHashMap::default();
    let mut predecessors: FxHashMap<G::Node, Vec<G::Node>> = FxHashMap::default();
    let mut order = Vec::new();

    if graph.contains(start) {
        distances.insert(start, 0isize);
        path_counts.insert(start, 1u64);

        let mut frontier = LayeredFrontier::new([start]);
        while let Some(layer) = frontier.step(|current, next| {
            for &from in current {
                let distance = distances.get(&from).copied().unwrap_or(0);
                let paths = path_counts.get(&from).copied().unwrap_or(0);
                for to in graph.out_neighbors(from) {
                    let reached = distances.entry(to).or_insert_with(|| {
                        next.push(to);
                        distance + 1
                    });
                    if *reached == distance + 1 {
                        let count = path_counts.entry(to).or_insert(0);
                        *count = count.saturating_add(paths);
                        predecessors.entry(to).or_default().push(from);
                    }
                }
            }
        }) {
            order.extend(layer);
        }
    }

    order.reverse();
    ShortestPaths {
        start,
        distances,
        path_counts,
        predecessors,
        stack: order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::factory::create_graph;

    #[test]
    fn diamond_has_two_shortest_paths() {
        // 0 - 1 - 3 and 0 - 2 - 3, plus tail 3 - 4
        let g = create_graph(false, 0..5u32, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]).unwrap();
        let paths = breadth_first_search(&g, 0);

        assert_eq!(paths.distance(0), 0);
        assert_eq!(paths.distance(3), 2);
        assert_eq!(paths.distance(4), 3);
        assert_eq!(paths.path_count(3), 2);
        assert_eq!(paths.path_count(4), 2);
        assert_eq!(paths.predecessors(3), &[1, 2]);
        assert!(paths.predecessors(0).is_empty());
    }

    #[test]
    fn stack_is_non_increasing_in_distance() {
        let g = create_graph(false, 0..6u32, [(0, 1), (1, 2), (0, 3), (3, 4), (4, 5)]).unwrap();
        let paths = breadth_first_search(&g, 0);

        let depths: Vec<isize> = paths.stack().iter().map(|&n| paths.distance(n)).collect();
        assert!(depths.windows(2).all(|w| w[0] >= w[1]), "{depths:?}");
        assert_eq!(paths.stack().last(), Some(&0));
        assert_eq!(paths.reached_count(), 6);
    }

    #[test]
    fn unreached_nodes_keep_sentinels() {
        // directed 0 -> 1, 2 -> 0
        let g = create_graph(true, 0..3u8, [(0, 1), (2, 0)]).unwrap();
        let paths = breadth_first_search(&g, 0);

        assert_eq!(paths.distance(2), -1);
        assert_eq!(paths.path_count(2), 0);
        assert_eq!(paths.distance(1), 1);
        assert_eq!(paths.distance(99), -1);
    }

    #[test]
    fn absent_start_reaches_nothing() {
        let g = create_graph(false, 0..3u8, [(0, 1)]).unwrap();
        let paths = breadth_first_search(&g, 7);

        assert_eq!(paths.reached_count(), 0);
        assert_eq!(paths.distance(7), -1);
    }

    #[test]
    fn self_loops_do_not_add_paths() {
        let g = create_graph(false, 0..2u8, [(0, 0), (0, 1)]).unwrap();
        let paths = breadth_first_search(&g, 0);

        assert_eq!(paths.path_count(0), 1);
        assert_eq!(paths.path_count(1), 1);
        assert!(paths.predecessors(0).is_empty());
    }
}
