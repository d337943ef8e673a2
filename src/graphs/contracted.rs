use std::vec::IntoIter;

use crate::graphs::graph::{Graph, NodeSet};

/// Live view of a parent graph with a node subset collapsed to one
/// replacement node.
///
/// The node set is `(parent nodes \ subset) ∪ {replacement}`. Every edge
/// endpoint inside the subset is rewritten to the replacement and parallel
/// edges collapse. When the replacement is itself a parent node outside the
/// subset, its own edges are merged in. An edge between two merged nodes
/// becomes a self-loop on the replacement. Direction is preserved.
pub struct ContractedGraph<'g, G: Graph> {
    parent: &'g G,
    subset: NodeSet<G::Node>,
    replacement: G::Node,
}

impl<'g, G: Graph> ContractedGraph<'g, G> {
    pub fn new(
        parent: &'g G,
        subset: impl IntoIterator<Item = G::Node>,
        replacement: G::Node,
    ) -> Self {
        Self {
            parent,
            subset: subset.into_iter().collect(),
            replacement,
        }
    }

    pub fn parent(&self) -> &'g G {
        self.parent
    }

    pub fn replacement(&self) -> G::Node {
        self.replacement
    }

    /// Where a parent node ends up after contraction.
    #[inline]
    pub fn image(&self, node: G::Node) -> G::Node {
        if self.subset.contains(&node) {
            self.replacement
        } else {
            node
        }
    }

    #[inline]
    fn is_merged(&self, node: G::Node) -> bool {
        node == self.replacement || self.subset.contains(&node)
    }

    fn collect_neighbors(&self, node: G::Node, incoming: bool) -> Vec<G::Node> {
        let sources: Vec<G::Node> = if node == self.replacement {
            self.parent.nodes().filter(|&n| self.is_merged(n)).collect()
        } else if self.contains(node) {
            vec![node]
        } else {
            Vec::new()
        };

        let mut seen = NodeSet::default();
        let mut neighbors = Vec::new();
        for source in sources {
            let adjacent = if incoming {
                self.parent.in_neighbors(source)
            } else {
                self.parent.out_neighbors(source)
            };
            for other in adjacent {
                let image = self.image(other);
                if seen.insert(image) {
                    neighbors.push(image);
                }
            }
        }
        neighbors
    }
}

/// Nodes of a [`ContractedGraph`]: parent order, with the replacement at
/// the position of the first merged node (or last when none is present).
pub struct ContractedNodes<'a, 'g, G>
where
    G: Graph + 'a,
{
    view: &'a ContractedGraph<'g, G>,
    inner: G::Nodes<'a>,
    replacement_emitted: bool,
}

impl<'a, G> Iterator for ContractedNodes<'a, '_, G>
where
    G: Graph + 'a,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        for node in self.inner.by_ref() {
            if !self.view.is_merged(node) {
                return Some(node);
            }
            if !self.replacement_emitted {
                self.replacement_emitted = true;
                return Some(self.view.replacement);
            }
        }
        if self.replacement_emitted {
            None
        } else {
            self.replacement_emitted = true;
            Some(self.view.replacement)
        }
    }
}

impl<'g, G: Graph> Graph for ContractedGraph<'g, G> {
    type Node = G::Node;

    type Nodes<'a>
        = ContractedNodes<'a, 'g, G>
    where
        Self: 'a;

    type Neighbors<'a>
        = IntoIter<G::Node>
    where
        Self: 'a;

    fn nodes(&self) -> Self::Nodes<'_> {
        ContractedNodes {
            view: self,
            inner: self.parent.nodes(),
            replacement_emitted: false,
        }
    }

    fn contains(&self, node: G::Node) -> bool {
        node == self.replacement || (self.parent.contains(node) && !self.subset.contains(&node))
    }

    fn is_directed(&self) -> bool {
        self.parent.is_directed()
    }

    fn out_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        self.collect_neighbors(node, false).into_iter()
    }

    fn in_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        self.collect_neighbors(node, true).into_iter()
    }
}
