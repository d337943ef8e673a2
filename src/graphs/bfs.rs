use rayon::iter::{IntoParallelRefIterator, ParallelExtend, ParallelIterator};

use crate::graphs::{
    frontier::{Frontier, LayeredFrontier},
    graph::{Graph, NodeSet},
    visited::Visited,
};

const PARALLEL_THRESHOLD: usize = 1024;

/// Which edges a traversal follows out of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Successors only.
    #[default]
    Outgoing,
    /// Successors and predecessors, i.e. the symmetrized relation.
    Both,
}

#[inline]
fn successors<G: Graph>(
    graph: &G,
    direction: Direction,
    from: G::Node,
) -> impl Iterator<Item = G::Node> + '_ {
    let incoming = (direction == Direction::Both && graph.is_directed())
        .then(|| graph.in_neighbors(from));
    graph
        .out_neighbors(from)
        .chain(incoming.into_iter().flatten())
}

/// Layered breadth-first traversal.
///
/// Each call to `next` yields one layer: every node whose distance from the
/// initial nodes equals the layer's depth. Large layers are expanded in
/// parallel with rayon.
pub struct GraphBfs<'g, G, V>
where
    G: Graph,
    V: Visited<G::Node>,
{
    graph: &'g G,
    direction: Direction,
    visited: V,
    frontier: LayeredFrontier<G::Node>,
    buffer: Vec<G::Node>,
}

/// Breadth-first traversal with a hash set as visited store.
pub type NodeBfs<'g, G> = GraphBfs<'g, G, NodeSet<<G as Graph>::Node>>;

impl<'g, G, V> GraphBfs<'g, G, V>
where
    G: Graph,
    V: Visited<G::Node>,
{
    /// Traversal following successors from `initials`.
    ///
    /// Initial nodes absent from the graph are ignored.
    pub fn new(graph: &'g G, initials: impl IntoIterator<Item = G::Node>) -> Self {
        Self::with_direction(graph, initials, Direction::Outgoing)
    }

    pub fn with_direction(
        graph: &'g G,
        initials: impl IntoIterator<Item = G::Node>,
        direction: Direction,
    ) -> Self {
        let mut visited = V::default();
        let mut initial_frontier = Vec::new();

        for value in initials {
            if graph.contains(value) && visited.visit(value) {
                initial_frontier.push(value);
            }
        }

        let frontier = LayeredFrontier::new(initial_frontier);

        // debug: no duplicates, all in visited
        debug_assert!(frontier.layer().iter().all(|v| visited.is_visited(v)));
        debug_assert!({
            let mut seen = NodeSet::default();
            frontier.layer().iter().all(|v| seen.insert(*v))
        });

        Self {
            graph,
            direction,
            visited,
            frontier,
            buffer: Vec::new(),
        }
    }

    /// Depth of the layer the next call to `next` returns.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frontier.depth()
    }

    #[inline]
    pub fn visited(&self) -> &V {
        &self.visited
    }

    #[inline]
    pub fn into_visited(self) -> V {
        self.visited
    }

    /// Runs the traversal to completion and returns every reached node.
    pub fn into_reachable(mut self) -> V {
        while self.next().is_some() {}
        self.into_visited()
    }

    #[inline]
    pub fn sequential_step(&mut self) -> Option<Vec<G::Node>> {
        let graph = self.graph;
        let direction = self.direction;
        let visited = &mut self.visited;

        self.frontier.step(|current, next| {
            for &from in current {
                for to in successors(graph, direction, from) {
                    if visited.visit(to) {
                        next.push(to);
                    }
                }
            }

            // debug invariants: next has no duplicates, and is subset of visited
            debug_assert!(next.iter().all(|v| visited.is_visited(v)));
        })
    }

    #[inline]
    pub fn parallel_step(&mut self) -> Option<Vec<G::Node>> {
        let graph = self.graph;
        let direction = self.direction;
        let visited = &mut self.visited;
        let buffer = &mut self.buffer;

        self.frontier.step(|current, next| {
            // Large layer: use rayon to collect successors, then filter.
            buffer.clear();

            buffer.par_extend(
                current
                    .par_iter()
                    .flat_map_iter(|&from| successors(graph, direction, from)),
            );

            for successor in buffer.drain(..) {
                if visited.visit(successor) {
                    next.push(successor);
                }
            }

            debug_assert!(next.iter().all(|v| visited.is_visited(v)));
        })
    }
}

impl<G, V> Iterator for GraphBfs<'_, G, V>
where
    G: Graph,
    V: Visited<G::Node>,
{
    type Item = Vec<G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.len() < PARALLEL_THRESHOLD {
            self.sequential_step()
        } else {
            self.parallel_step()
        }
    }
}
