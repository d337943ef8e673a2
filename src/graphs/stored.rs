use std::{fmt, iter::Copied, slice::Iter};

use crate::graphs::{
    graph::{Graph, Node, describe},
    index::{IndexedNodes, NodeIndex},
    matrix::{MatrixGraph, MatrixNeighbors},
    sparse::SparseGraph,
};

/// A graph backed by one of the two storage strategies.
///
/// Returned by the factory functions in
/// [`factory`](crate::graphs::factory), which choose the variant from the
/// graph's size and density.
#[derive(Debug, Clone)]
pub enum StoredGraph<N: Node> {
    Sparse(SparseGraph<N>),
    Matrix(MatrixGraph<N>),
}

impl<N: Node> StoredGraph<N> {
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    pub fn node_index(&self) -> &NodeIndex<N> {
        match self {
            Self::Sparse(g) => g.node_index(),
            Self::Matrix(g) => g.node_index(),
        }
    }
}

impl<N: Node> From<SparseGraph<N>> for StoredGraph<N> {
    fn from(graph: SparseGraph<N>) -> Self {
        Self::Sparse(graph)
    }
}

impl<N: Node> From<MatrixGraph<N>> for StoredGraph<N> {
    fn from(graph: MatrixGraph<N>) -> Self {
        Self::Matrix(graph)
    }
}

impl<N: Node> fmt::Display for StoredGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}

/// Neighbor iterator of a [`StoredGraph`].
pub enum StoredNeighbors<'a, N: Node> {
    Sparse(IndexedNodes<'a, N>),
    Matrix(MatrixNeighbors<'a, N>),
}

impl<N: Node> Iterator for StoredNeighbors<'_, N> {
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sparse(it) => it.next(),
            Self::Matrix(it) => it.next(),
        }
    }
}

macro_rules! delegate {
    ($self:ident, $g:ident => $body:expr) => {
        match $self {
            StoredGraph::Sparse($g) => $body,
            StoredGraph::Matrix($g) => $body,
        }
    };
}

impl<N: Node> Graph for StoredGraph<N> {
    type Node = N;

    type Nodes<'a>
        = Copied<Iter<'a, N>>
    where
        Self: 'a;

    type Neighbors<'a>
        = StoredNeighbors<'a, N>
    where
        Self: 'a;

    fn nodes(&self) -> Self::Nodes<'_> {
        self.node_index().iter()
    }

    fn node_count(&self) -> usize {
        self.node_index().len()
    }

    fn contains(&self, node: N) -> bool {
        self.node_index().contains(node)
    }

    fn is_directed(&self) -> bool {
        delegate!(self, g => g.is_directed())
    }

    fn out_neighbors(&self, node: N) -> Self::Neighbors<'_> {
        match self {
            Self::Sparse(g) => StoredNeighbors::Sparse(g.out_neighbors(node)),
            Self::Matrix(g) => StoredNeighbors::Matrix(g.out_neighbors(node)),
        }
    }

    fn in_neighbors(&self, node: N) -> Self::Neighbors<'_> {
        match self {
            Self::Sparse(g) => StoredNeighbors::Sparse(g.in_neighbors(node)),
            Self::Matrix(g) => StoredNeighbors::Matrix(g.in_neighbors(node)),
        }
    }

    fn adjacent(&self, from: N, to: N) -> bool {
        delegate!(self, g => g.adjacent(from, to))
    }

    fn out_degree(&self, node: N) -> usize {
        delegate!(self, g => g.out_degree(node))
    }

    fn in_degree(&self, node: N) -> usize {
        delegate!(self, g => g.in_degree(node))
    }

    fn degree(&self, node: N) -> usize {
        delegate!(self, g => g.degree(node))
    }

    fn edge_count(&self) -> usize {
        delegate!(self, g => g.edge_count())
    }
}
