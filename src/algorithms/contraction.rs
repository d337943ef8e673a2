use crate::{
    error::Result,
    graphs::{contracted::ContractedGraph, factory::copy_graph, graph::Graph, stored::StoredGraph},
};

/// Materializes the contraction of `subset` into `replacement`.
///
/// Edge endpoints inside `subset` are rewritten to `replacement`, parallel
/// edges collapse and directed edges keep their orientation. Use
/// [`ContractedGraph`] directly for a live view instead of a copy.
pub fn contracted_graph<G: Graph>(
    graph: &G,
    subset: impl IntoIterator<Item = G::Node>,
    replacement: G::Node,
) -> Result<StoredGraph<G::Node>> {
    copy_graph(&ContractedGraph::new(graph, subset, replacement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{factory::create_graph, graph::NodeSet};

    use proptest::prelude::*;

    #[test]
    fn star_collapses_to_loop() {
        // hub 0 with spokes 1..4; contract everything into 0
        let g = create_graph(false, 0..5u8, [(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let c = contracted_graph(&g, 0..5u8, 0).unwrap();

        assert_eq!(c.nodes().collect::<Vec<_>>(), vec![0]);
        assert_eq!(c.edges(), vec![(0, 0)]);
        assert_eq!(c.degree(0), 2);
    }

    #[test]
    fn directed_contraction_keeps_orientation() {
        // 0 -> 1, 2 -> 3, 3 -> 0; merge {1, 2} into 1
        let g = create_graph(true, 0..4u8, [(0, 1), (2, 3), (3, 0)]).unwrap();
        let c = contracted_graph(&g, [1, 2], 1).unwrap();

        let edges: NodeSet<(u8, u8)> = c.edges().into_iter().collect();
        let expected: NodeSet<(u8, u8)> = [(0, 1), (1, 3), (3, 0)].into_iter().collect();
        assert_eq!(edges, expected);
        assert!(!c.adjacent(1, 0));
    }

    proptest! {
        // Contracting a singleton into itself leaves the graph unchanged.
        #[test]
        fn prop_singleton_contraction_is_identity(
            directed in any::<bool>(),
            edges in prop::collection::vec((0u8..12, 0u8..12), 0..30),
            v in 0u8..12,
        ) {
            let g = create_graph(directed, 0u8..12, edges).unwrap();
            let c = contracted_graph(&g, [v], v).unwrap();

            prop_assert_eq!(c.nodes().collect::<Vec<_>>(), g.nodes().collect::<Vec<_>>());
            prop_assert_eq!(c.edge_count(), g.edge_count());
            for a in g.nodes() {
                for b in g.nodes() {
                    prop_assert_eq!(c.adjacent(a, b), g.adjacent(a, b));
                }
            }
        }
    }
}
