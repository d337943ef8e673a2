use crate::graphs::graph::Graph;

fn keep_all_nodes<N>(_: N) -> bool {
    true
}

fn keep_all_edges<N>(_: N, _: N) -> bool {
    true
}

/// Live view of a parent graph restricted by a node predicate and an edge
/// predicate.
///
/// Nothing is materialized: every query is answered by the parent plus the
/// predicates. An edge survives when both endpoints and the edge itself
/// pass. For undirected parents the edge predicate should be symmetric.
pub struct FilteredGraph<'g, G: Graph, NF, EF> {
    parent: &'g G,
    node_filter: NF,
    edge_filter: EF,
}

impl<'g, G, NF, EF> FilteredGraph<'g, G, NF, EF>
where
    G: Graph,
    NF: Fn(G::Node) -> bool + Sync,
    EF: Fn(G::Node, G::Node) -> bool + Sync,
{
    pub fn new(parent: &'g G, node_filter: NF, edge_filter: EF) -> Self {
        Self {
            parent,
            node_filter,
            edge_filter,
        }
    }

    pub fn parent(&self) -> &'g G {
        self.parent
    }

    #[inline]
    fn keeps_node(&self, node: G::Node) -> bool {
        self.parent.contains(node) && (self.node_filter)(node)
    }

    #[inline]
    fn keeps_edge(&self, from: G::Node, to: G::Node) -> bool {
        self.keeps_node(from) && self.keeps_node(to) && (self.edge_filter)(from, to)
    }
}

impl<'g, G, NF> FilteredGraph<'g, G, NF, fn(G::Node, G::Node) -> bool>
where
    G: Graph,
    NF: Fn(G::Node) -> bool + Sync,
{
    /// Induced view on the nodes passing `node_filter`.
    pub fn with_nodes(parent: &'g G, node_filter: NF) -> Self {
        Self::new(parent, node_filter, keep_all_edges::<G::Node>)
    }
}

/// Keeps the edges whose weight has magnitude at least `min_magnitude`.
///
/// All nodes are kept, so thresholding can leave isolates behind.
pub fn threshold<G, W>(
    parent: &G,
    weight: W,
    min_magnitude: f64,
) -> FilteredGraph<'_, G, fn(G::Node) -> bool, impl Fn(G::Node, G::Node) -> bool + Sync>
where
    G: Graph,
    W: Fn(G::Node, G::Node) -> f64 + Sync,
{
    FilteredGraph::new(
        parent,
        keep_all_nodes::<G::Node> as fn(G::Node) -> bool,
        move |from, to| weight(from, to).abs() >= min_magnitude,
    )
}

/// Nodes of a [`FilteredGraph`], in parent order.
pub struct FilteredNodes<'a, 'g, G, NF, EF>
where
    G: Graph + 'a,
{
    view: &'a FilteredGraph<'g, G, NF, EF>,
    inner: G::Nodes<'a>,
}

impl<'a, G, NF, EF> Iterator for FilteredNodes<'a, '_, G, NF, EF>
where
    G: Graph + 'a,
    NF: Fn(G::Node) -> bool + Sync,
    EF: Fn(G::Node, G::Node) -> bool + Sync,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.view;
        self.inner.find(|&node| (view.node_filter)(node))
    }
}

/// Neighbors of one node in a [`FilteredGraph`].
pub struct FilteredNeighbors<'a, 'g, G, NF, EF>
where
    G: Graph + 'a,
{
    view: &'a FilteredGraph<'g, G, NF, EF>,
    node: G::Node,
    /// Predecessor scan: the fixed node is the edge target.
    reversed: bool,
    /// `None` when the fixed node itself is filtered out.
    inner: Option<G::Neighbors<'a>>,
}

impl<'a, G, NF, EF> Iterator for FilteredNeighbors<'a, '_, G, NF, EF>
where
    G: Graph + 'a,
    NF: Fn(G::Node) -> bool + Sync,
    EF: Fn(G::Node, G::Node) -> bool + Sync,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.view;
        let node = self.node;
        let reversed = self.reversed;
        self.inner.as_mut()?.find(|&other| {
            if reversed {
                view.keeps_edge(other, node)
            } else {
                view.keeps_edge(node, other)
            }
        })
    }
}

impl<'g, G, NF, EF> Graph for FilteredGraph<'g, G, NF, EF>
where
    G: Graph,
    NF: Fn(G::Node) -> bool + Sync,
    EF: Fn(G::Node, G::Node) -> bool + Sync,
{
    type Node = G::Node;

    type Nodes<'a>
        = FilteredNodes<'a, 'g, G, NF, EF>
    where
        Self: 'a;

    type Neighbors<'a>
        = FilteredNeighbors<'a, 'g, G, NF, EF>
    where
        Self: 'a;

    fn nodes(&self) -> Self::Nodes<'_> {
        FilteredNodes {
            view: self,
            inner: self.parent.nodes(),
        }
    }

    fn contains(&self, node: G::Node) -> bool {
        self.keeps_node(node)
    }

    fn is_directed(&self) -> bool {
        self.parent.is_directed()
    }

    fn out_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        FilteredNeighbors {
            view: self,
            node,
            reversed: false,
            inner: self
                .keeps_node(node)
                .then(|| self.parent.out_neighbors(node)),
        }
    }

    fn in_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        FilteredNeighbors {
            view: self,
            node,
            reversed: true,
            inner: self
                .keeps_node(node)
                .then(|| self.parent.in_neighbors(node)),
        }
    }

    fn adjacent(&self, from: G::Node, to: G::Node) -> bool {
        self.keeps_edge(from, to) && self.parent.adjacent(from, to)
    }
}
