use std::{fmt::Debug, hash::Hash};

use rustc_hash::FxHashSet;

/// Identifier of a node.
///
/// Typically a small copyable value such as `usize`, `u32` or an interned
/// handle. Nodes are shared across rayon workers during large traversals,
/// hence the `Send + Sync` requirement.
pub trait Node: Copy + Eq + Hash + Debug + Send + Sync {}

impl<T> Node for T where T: Copy + Eq + Hash + Debug + Send + Sync {}

/// Owned set of nodes.
pub type NodeSet<N> = FxHashSet<N>;

/// High level abstraction for a finite simple graph.
///
/// The trait does not prescribe how nodes and edges are stored. Storage
/// strategies ([`SparseGraph`](crate::SparseGraph),
/// [`MatrixGraph`](crate::MatrixGraph)) materialize adjacency once at
/// construction; views ([`FilteredGraph`](crate::FilteredGraph),
/// [`Subgraph`](crate::Subgraph), [`ContractedGraph`](crate::ContractedGraph))
/// recompute every answer from a parent graph.
///
/// All queries are total: asking about a node that is not part of the graph
/// yields an empty iterator, `false` or zero, never an error.
///
/// Iteration uses associated iterator types, so implementations can avoid
/// extra allocation and avoid dynamic dispatch.
pub trait Graph: Sync {
    /// Type used to identify nodes.
    type Node: Node;

    /// Iterator over all nodes in the graph.
    ///
    /// The order is implementation defined but stable for one graph instance.
    type Nodes<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;

    /// Iterator over the successors or predecessors of one node.
    type Neighbors<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;

    /// Returns an iterator over all nodes.
    fn nodes(&self) -> Self::Nodes<'_>;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Returns true when `node` belongs to the graph.
    fn contains(&self, node: Self::Node) -> bool;

    /// Returns true when edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Successors of `node`.
    ///
    /// For undirected graphs this is the full neighbor set. A self-loop
    /// lists the node itself once.
    fn out_neighbors(&self, node: Self::Node) -> Self::Neighbors<'_>;

    /// Predecessors of `node`.
    ///
    /// For undirected graphs this equals [`Graph::out_neighbors`].
    fn in_neighbors(&self, node: Self::Node) -> Self::Neighbors<'_>;

    /// Symmetrized neighbor set: every node joined to `node` by an edge in
    /// either direction, without duplicates and in a stable order.
    fn neighbors(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut neighbors: Vec<Self::Node> = self.out_neighbors(node).collect();
        if self.is_directed() {
            let mut seen: NodeSet<Self::Node> = neighbors.iter().copied().collect();
            neighbors.extend(self.in_neighbors(node).filter(|n| seen.insert(*n)));
        }
        neighbors
    }

    /// Returns true when there is an edge from `from` to `to`.
    ///
    /// Ordered for directed graphs, unordered otherwise. This checks for a
    /// single step edge only, not reachability through longer paths.
    fn adjacent(&self, from: Self::Node, to: Self::Node) -> bool {
        self.out_neighbors(from).any(|n| n == to)
    }

    fn out_degree(&self, node: Self::Node) -> usize {
        self.out_neighbors(node).count()
    }

    fn in_degree(&self, node: Self::Node) -> usize {
        self.in_neighbors(node).count()
    }

    /// Number of edge endpoints incident to `node`.
    ///
    /// Loop edges contribute 2 to the degree, in accordance with standard
    /// graph-theoretic conventions. For directed graphs this is the sum of
    /// the ingoing and outgoing degrees.
    fn degree(&self, node: Self::Node) -> usize {
        if self.is_directed() {
            self.out_degree(node) + self.in_degree(node)
        } else {
            self.out_neighbors(node)
                .map(|n| if n == node { 2 } else { 1 })
                .sum()
        }
    }

    /// Lists every edge once as `(from, to)`.
    ///
    /// Undirected edges are reported once, in the orientation in which they
    /// are first met while scanning nodes in order.
    fn edges(&self) -> Vec<(Self::Node, Self::Node)> {
        let mut edges = Vec::new();
        if self.is_directed() {
            for from in self.nodes() {
                edges.extend(self.out_neighbors(from).map(|to| (from, to)));
            }
        } else {
            let mut done = NodeSet::default();
            for from in self.nodes() {
                edges.extend(
                    self.out_neighbors(from)
                        .filter(|to| !done.contains(to))
                        .map(|to| (from, to)),
                );
                done.insert(from);
            }
        }
        edges
    }

    /// Returns the number of edges, counting each undirected edge once.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Size measure for the whole graph: nodes plus edges.
    fn size(&self) -> usize {
        self.node_count() + self.edge_count()
    }

    /// Returns true when the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

impl<G> Graph for &G
where
    G: Graph + ?Sized,
{
    type Node = G::Node;

    type Nodes<'a>
        = G::Nodes<'a>
    where
        Self: 'a;

    type Neighbors<'a>
        = G::Neighbors<'a>
    where
        Self: 'a;

    fn nodes(&self) -> Self::Nodes<'_> {
        (**self).nodes()
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn contains(&self, node: Self::Node) -> bool {
        (**self).contains(node)
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn out_neighbors(&self, node: Self::Node) -> Self::Neighbors<'_> {
        (**self).out_neighbors(node)
    }

    fn in_neighbors(&self, node: Self::Node) -> Self::Neighbors<'_> {
        (**self).in_neighbors(node)
    }

    fn neighbors(&self, node: Self::Node) -> Vec<Self::Node> {
        (**self).neighbors(node)
    }

    fn adjacent(&self, from: Self::Node, to: Self::Node) -> bool {
        (**self).adjacent(from, to)
    }

    fn out_degree(&self, node: Self::Node) -> usize {
        (**self).out_degree(node)
    }

    fn in_degree(&self, node: Self::Node) -> usize {
        (**self).in_degree(node)
    }

    fn degree(&self, node: Self::Node) -> usize {
        (**self).degree(node)
    }

    fn edges(&self) -> Vec<(Self::Node, Self::Node)> {
        (**self).edges()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}

/// Human readable listing of a graph: `NODES: [..]  EDGES: [..]`.
///
/// Nodes and edges appear in graph iteration order.
pub fn describe<G: Graph + ?Sized>(graph: &G) -> String {
    let nodes: Vec<String> = graph.nodes().map(|n| format!("{n:?}")).collect();
    let arrow = if graph.is_directed() { "->" } else { "-" };
    let edges: Vec<String> = graph
        .edges()
        .into_iter()
        .map(|(from, to)| format!("{from:?}{arrow}{to:?}"))
        .collect();
    format!("NODES: [{}]  EDGES: [{}]", nodes.join(", "), edges.join(", "))
}
