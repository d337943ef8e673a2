use crate::graphs::graph::{Graph, NodeSet};

/// Induced subgraph on a subset of a parent's nodes.
///
/// Holds only the member set; adjacency is read live from the parent.
/// Subset nodes the parent does not contain are dropped on construction.
pub struct Subgraph<'g, G: Graph> {
    parent: &'g G,
    members: NodeSet<G::Node>,
}

impl<'g, G: Graph> Subgraph<'g, G> {
    pub fn new(parent: &'g G, nodes: impl IntoIterator<Item = G::Node>) -> Self {
        let members = nodes.into_iter().filter(|&n| parent.contains(n)).collect();
        Self { parent, members }
    }

    pub fn parent(&self) -> &'g G {
        self.parent
    }

    pub fn members(&self) -> &NodeSet<G::Node> {
        &self.members
    }
}

/// Parent iterator restricted to subgraph members.
pub struct Members<'a, N, I> {
    members: &'a NodeSet<N>,
    inner: Option<I>,
}

impl<N, I> Iterator for Members<'_, N, I>
where
    N: Eq + std::hash::Hash,
    I: Iterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let members = self.members;
        self.inner.as_mut()?.find(|n| members.contains(n))
    }
}

impl<'g, G: Graph> Graph for Subgraph<'g, G> {
    type Node = G::Node;

    type Nodes<'a>
        = Members<'a, G::Node, G::Nodes<'a>>
    where
        Self: 'a;

    type Neighbors<'a>
        = Members<'a, G::Node, G::Neighbors<'a>>
    where
        Self: 'a;

    fn nodes(&self) -> Self::Nodes<'_> {
        Members {
            members: &self.members,
            inner: Some(self.parent.nodes()),
        }
    }

    fn node_count(&self) -> usize {
        self.members.len()
    }

    fn contains(&self, node: G::Node) -> bool {
        self.members.contains(&node)
    }

    fn is_directed(&self) -> bool {
        self.parent.is_directed()
    }

    fn out_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        Members {
            members: &self.members,
            inner: self
                .contains(node)
                .then(|| self.parent.out_neighbors(node)),
        }
    }

    fn in_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        Members {
            members: &self.members,
            inner: self.contains(node).then(|| self.parent.in_neighbors(node)),
        }
    }

    fn adjacent(&self, from: G::Node, to: G::Node) -> bool {
        self.contains(from) && self.contains(to) && self.parent.adjacent(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::factory::create_graph;

    #[test]
    fn induced_edges_only() {
        // square 0-1-2-3-0 with diagonal 0-2
        let g = create_graph(
            false,
            0..4u16,
            [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
        )
        .unwrap();
        let sub = Subgraph::new(&g, [2, 0, 1, 9]);

        assert_eq!(sub.node_count(), 3, "9 is not a parent node");
        assert_eq!(sub.nodes().collect::<Vec<_>>(), vec![0, 1, 2], "parent order");
        assert_eq!(sub.edge_count(), 3);
        assert_eq!(sub.neighbors(0), vec![1, 2]);
        assert_eq!(sub.degree(2), 2);
        assert!(!sub.adjacent(2, 3));
        assert_eq!(sub.out_neighbors(3).count(), 0);
    }

    #[test]
    fn directed_subgraph_keeps_orientation() {
        let g = create_graph(true, ['a', 'b', 'c'], [('a', 'b'), ('c', 'a')]).unwrap();
        let sub = Subgraph::new(&g, ['a', 'c']);

        assert!(sub.is_directed());
        assert_eq!(sub.edges(), vec![('c', 'a')]);
        assert_eq!(sub.in_neighbors('a').collect::<Vec<_>>(), vec!['c']);
        assert_eq!(sub.out_neighbors('a').count(), 0);
    }
}
