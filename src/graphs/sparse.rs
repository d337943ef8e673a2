use std::{iter::Copied, slice::Iter};

use crate::{
    error::Result,
    graphs::{
        csr::Csr,
        graph::{Graph, Node},
        index::{IndexedNodes, NodeIndex},
    },
};

/// Adjacency-list backed simple graph.
///
/// Nodes are mapped to dense indices and the adjacency is kept in
/// [`Csr`] rows: `O(n + m)` space, `O(log degree)` adjacency test.
/// Undirected graphs store every edge in both rows; directed graphs keep a
/// transposed copy for predecessor queries.
///
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct SparseGraph<N: Node> {
    index: NodeIndex<N>,
    directed: bool,
    outgoing: Csr,
    /// Transposed adjacency, only present for directed graphs.
    incoming: Option<Csr>,
    edge_count: usize,
}

impl<N: Node> SparseGraph<N> {
    /// Builds a graph from explicit node and edge lists.
    ///
    /// Fails when an edge endpoint is not among `nodes`. Parallel edges
    /// collapse.
    pub fn new<I, E>(directed: bool, nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N)>,
    {
        let index: NodeIndex<N> = nodes.into_iter().collect();
        let pairs = index.index_edges(edges)?;
        Ok(Self::from_index_pairs(directed, index, pairs))
    }

    pub(crate) fn from_index_pairs(
        directed: bool,
        index: NodeIndex<N>,
        mut pairs: Vec<(usize, usize)>,
    ) -> Self {
        let n = index.len();
        if directed {
            let outgoing = Csr::new(n, pairs);
            let incoming = outgoing.transpose();
            let edge_count = outgoing.pair_count();
            Self {
                index,
                directed,
                outgoing,
                incoming: Some(incoming),
                edge_count,
            }
        } else {
            let reversed: Vec<_> = pairs
                .iter()
                .filter(|(a, b)| a != b)
                .map(|&(a, b)| (b, a))
                .collect();
            pairs.extend(reversed);
            let outgoing = Csr::new(n, pairs);
            let loops = (0..n).filter(|&v| outgoing.contains(v, v)).count();
            let edge_count = (outgoing.pair_count() + loops) / 2;
            Self {
                index,
                directed,
                outgoing,
                incoming: None,
                edge_count,
            }
        }
    }

    /// Dense index lookup used by this graph.
    pub fn node_index(&self) -> &NodeIndex<N> {
        &self.index
    }

    fn incoming(&self) -> &Csr {
        self.incoming.as_ref().unwrap_or(&self.outgoing)
    }

    fn row<'a>(&'a self, csr: &'a Csr, node: N) -> IndexedNodes<'a, N> {
        let row = match self.index.index_of(node) {
            Some(i) => csr.row(i),
            None => &[],
        };
        self.index.resolve(row)
    }
}

impl<N: Node> Graph for SparseGraph<N> {
    type Node = N;

    type Nodes<'a>
        = Copied<Iter<'a, N>>
    where
        Self: 'a;

    type Neighbors<'a>
        = IndexedNodes<'a, N>
    where
        Self: 'a;

    fn nodes(&self) -> Self::Nodes<'_> {
        self.index.iter()
    }

    fn node_count(&self) -> usize {
        self.index.len()
    }

    fn contains(&self, node: N) -> bool {
        self.index.contains(node)
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn out_neighbors(&self, node: N) -> Self::Neighbors<'_> {
        self.row(&self.outgoing, node)
    }

    fn in_neighbors(&self, node: N) -> Self::Neighbors<'_> {
        self.row(self.incoming(), node)
    }

    fn adjacent(&self, from: N, to: N) -> bool {
        match (self.index.index_of(from), self.index.index_of(to)) {
            (Some(from), Some(to)) => self.outgoing.contains(from, to),
            _ => false,
        }
    }

    fn out_degree(&self, node: N) -> usize {
        self.index
            .index_of(node)
            .map_or(0, |i| self.outgoing.row_len(i))
    }

    fn in_degree(&self, node: N) -> usize {
        self.index
            .index_of(node)
            .map_or(0, |i| self.incoming().row_len(i))
    }

    fn degree(&self, node: N) -> usize {
        let Some(i) = self.index.index_of(node) else {
            return 0;
        };
        if self.directed {
            self.outgoing.row_len(i) + self.incoming().row_len(i)
        } else {
            self.outgoing.row_len(i) + usize::from(self.outgoing.contains(i, i))
        }
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}
