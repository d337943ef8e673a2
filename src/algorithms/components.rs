use std::cell::OnceCell;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graphs::{
    bfs::{Direction, NodeBfs},
    graph::{Graph, NodeSet},
    subgraph::Subgraph,
};

/// Partitions the nodes into maximal connected sets.
///
/// Connectivity is taken over the symmetrized adjacency relation, so on a
/// directed graph these are the weakly connected components; strong
/// connectivity is not distinguished. Components come out in the order of
/// their first node in graph order.
pub fn components<G: Graph>(graph: &G) -> Vec<NodeSet<G::Node>> {
    let mut assigned = NodeSet::default();
    let mut parts = Vec::new();

    for node in graph.nodes() {
        if assigned.contains(&node) {
            continue;
        }
        let reached = NodeBfs::with_direction(graph, [node], Direction::Both).into_reachable();
        assigned.extend(reached.iter().copied());
        parts.push(reached);
    }

    debug!(
        nodes = graph.node_count(),
        components = parts.len(),
        "partitioned graph into components"
    );
    parts
}

/// A graph's partition into weakly connected components, with a lookup
/// from node to component and lazily built induced subgraphs.
pub struct GraphComponents<'g, G: Graph> {
    graph: &'g G,
    parts: Vec<NodeSet<G::Node>>,
    membership: FxHashMap<G::Node, usize>,
    subgraphs: OnceCell<Vec<Subgraph<'g, G>>>,
}

impl<'g, G: Graph> GraphComponents<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        let parts = components(graph);
        let membership = parts
            .iter()
            .enumerate()
            .flat_map(|(i, part)| part.iter().map(move |&n| (n, i)))
            .collect();
        Self {
            graph,
            parts,
            membership,
            subgraphs: OnceCell::new(),
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn components(&self) -> &[NodeSet<G::Node>] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Index of the component holding `node`.
    pub fn component_of(&self, node: G::Node) -> Option<usize> {
        self.membership.get(&node).copied()
    }

    /// The component with most nodes; the earliest one on ties.
    pub fn largest(&self) -> Option<&NodeSet<G::Node>> {
        self.parts
            .iter()
            .rev()
            .max_by_key(|part| part.len())
    }

    /// True for a graph with exactly one component. The empty graph is not
    /// connected.
    pub fn is_connected(&self) -> bool {
        self.parts.len() == 1
    }

    /// One induced subgraph per component, built on first call.
    pub fn subgraphs(&self) -> &[Subgraph<'g, G>] {
        self.subgraphs.get_or_init(|| {
            self.parts
                .iter()
                .map(|part| Subgraph::new(self.graph, part.iter().copied()))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::factory::create_graph;

    use proptest::prelude::*;

    fn set(nodes: &[char]) -> NodeSet<char> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn path_with_isolate() {
        let g = create_graph(false, ['A', 'B', 'C', 'D'], [('A', 'B'), ('B', 'C')]).unwrap();
        let parts = components(&g);

        assert_eq!(parts, vec![set(&['A', 'B', 'C']), set(&['D'])]);
    }

    #[test]
    fn directed_edges_connect_weakly() {
        // a -> b <- c, d -> d
        let g = create_graph(true, ['a', 'b', 'c', 'd'], [('a', 'b'), ('c', 'b'), ('d', 'd')])
            .unwrap();
        let parts = GraphComponents::new(&g);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts.component_of('c'), parts.component_of('a'));
        assert_ne!(parts.component_of('d'), parts.component_of('a'));
        assert_eq!(parts.component_of('z'), None);
        assert_eq!(parts.largest(), Some(&set(&['a', 'b', 'c'])));
        assert!(!parts.is_connected());
    }

    #[test]
    fn subgraphs_are_induced() {
        let g = create_graph(
            false,
            ['a', 'b', 'c', 'x', 'y'],
            [('a', 'b'), ('b', 'c'), ('c', 'a'), ('x', 'y')],
        )
        .unwrap();
        let parts = GraphComponents::new(&g);
        let subgraphs = parts.subgraphs();

        assert_eq!(subgraphs.len(), 2);
        assert_eq!(subgraphs[0].edge_count(), 3);
        assert_eq!(subgraphs[1].nodes().collect::<Vec<_>>(), vec!['x', 'y']);
        assert!(std::ptr::eq(subgraphs, parts.subgraphs()), "built once");
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g = create_graph(false, Vec::<u8>::new(), []).unwrap();
        let parts = GraphComponents::new(&g);

        assert!(parts.is_empty());
        assert!(!parts.is_connected());
        assert_eq!(parts.largest(), None);
    }

    proptest! {
        // The components partition the node set and each one is connected
        // through its own members.
        #[test]
        fn prop_components_partition(
            directed in any::<bool>(),
            edges in prop::collection::vec((0u8..25, 0u8..25), 0..40),
        ) {
            let g = create_graph(directed, 0u8..25, edges).unwrap();
            let parts = components(&g);

            let total: usize = parts.iter().map(NodeSet::len).sum();
            prop_assert_eq!(total, g.node_count());

            let mut union = NodeSet::default();
            for part in &parts {
                union.extend(part.iter().copied());
            }
            prop_assert_eq!(union.len(), g.node_count());

            for part in &parts {
                let sub = Subgraph::new(&g, part.iter().copied());
                let Some(&first) = part.iter().next() else {
                    continue;
                };
                let reached = NodeBfs::with_direction(&sub, [first], Direction::Both)
                    .into_reachable();
                prop_assert_eq!(&reached, part);
            }
        }
    }
}
