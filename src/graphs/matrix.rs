use std::{iter::Copied, slice::Iter};

use bit_vec::BitVec;

use crate::{
    error::Result,
    graphs::{
        graph::{Graph, Node},
        index::NodeIndex,
    },
};

/// Adjacency-matrix backed simple graph.
///
/// The adjacency is stored as a flat `BitVec` of length `n^2`, where `n`
/// is the number of nodes. The directed pair `(from, to)` of dense indices
/// corresponds to bit `from * n + to`; if the bit is set, the edge exists.
/// Undirected edges set both bits.
///
/// `O(n^2)` space, `O(1)` adjacency test. Self-loops are allowed, parallel
/// edges collapse. Immutable after construction.
#[derive(Debug, Clone)]
pub struct MatrixGraph<N: Node> {
    index: NodeIndex<N>,
    directed: bool,
    /// Flat bit matrix of size `node_count()^2`.
    matrix: BitVec,
    edge_count: usize,
}

impl<N: Node> MatrixGraph<N> {
    /// Builds a graph from explicit node and edge lists.
    ///
    /// Fails when an edge endpoint is not among `nodes`.
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
        pairs: Vec<(usize, usize)>,
    ) -> Self {
        let n = index.len();
        let mut matrix = BitVec::from_elem(n * n, false);
        let mut edge_count = 0;

        for (from, to) in pairs {
            let bit = from * n + to;
            if matrix[bit] {
                continue;
            }
            matrix.set(bit, true);
            if !directed {
                matrix.set(to * n + from, true);
            }
            edge_count += 1;
        }

        debug_assert_eq!(matrix.len(), n * n);

        Self {
            index,
            directed,
            matrix,
            edge_count,
        }
    }

    /// Dense index lookup used by this graph.
    pub fn node_index(&self) -> &NodeIndex<N> {
        &self.index
    }

    /// Bit position of the pair `(from, to)`.
    ///
    /// Does not check bounds.
    #[inline]
    fn bit(&self, from: usize, to: usize) -> usize {
        from * self.index.len() + to
    }

    #[inline]
    fn is_set(&self, from: usize, to: usize) -> bool {
        self.matrix[self.bit(from, to)]
    }

    fn line(&self, node: N, column: bool) -> MatrixNeighbors<'_, N> {
        match self.index.index_of(node) {
            Some(fixed) => MatrixNeighbors {
                graph: self,
                fixed,
                cursor: 0,
                column,
            },
            None => MatrixNeighbors {
                graph: self,
                fixed: 0,
                cursor: self.index.len(),
                column,
            },
        }
    }
}

impl<N: Node> Graph for MatrixGraph<N> {
    type Node = N;

    type Nodes<'a>
        = Copied<Iter<'a, N>>
    where
        Self: 'a;

    type Neighbors<'a>
        = MatrixNeighbors<'a, N>
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

    /// Scans the node's row.
    fn out_neighbors(&self, node: N) -> Self::Neighbors<'_> {
        self.line(node, false)
    }

    /// Scans the node's column.
    fn in_neighbors(&self, node: N) -> Self::Neighbors<'_> {
        self.line(node, true)
    }

    /// Constant-time adjacency query.
    fn adjacent(&self, from: N, to: N) -> bool {
        match (self.index.index_of(from), self.index.index_of(to)) {
            (Some(from), Some(to)) => self.is_set(from, to),
            _ => false,
        }
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Iterator over one row (successors) or one column (predecessors) of a
/// [`MatrixGraph`].
pub struct MatrixNeighbors<'a, N: Node> {
    graph: &'a MatrixGraph<N>,
    /// Row index when scanning successors, column index otherwise.
    fixed: usize,
    /// Next index to inspect along the line.
    cursor: usize,
    column: bool,
}

impl<N: Node> Iterator for MatrixNeighbors<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.graph.index.len();
        while self.cursor < n {
            let other = self.cursor;
            self.cursor += 1;

            let set = if self.column {
                self.graph.is_set(other, self.fixed)
            } else {
                self.graph.is_set(self.fixed, other)
            };
            if set {
                return self.graph.index.node(other);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.index.len() - self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::sparse::SparseGraph;

    use proptest::prelude::*;

    #[test]
    fn empty_matrix_has_no_bits() {
        let g = MatrixGraph::<u8>::new(true, [], []).unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.matrix.is_empty());
        assert_eq!(g.out_neighbors(3).count(), 0);
    }

    #[test]
    fn undirected_sets_both_bits() {
        let g = MatrixGraph::new(false, ['a', 'b', 'c'], [('a', 'b'), ('b', 'a'), ('c', 'c')])
            .unwrap();

        assert_eq!(g.edge_count(), 2, "a-b given twice collapses");
        assert!(g.adjacent('a', 'b'));
        assert!(g.adjacent('b', 'a'));
        assert!(g.adjacent('c', 'c'));
        assert!(!g.adjacent('a', 'c'));
        assert_eq!(g.degree('c'), 2, "loop counts twice");
        assert_eq!(g.out_neighbors('b').collect::<Vec<_>>(), vec!['a']);
        assert_eq!(g.matrix.iter().filter(|b| *b).count(), 3);
    }

    #[test]
    fn directed_rows_and_columns() {
        // 0 -> 1, 1 -> 0, 2 -> 1
        let g = MatrixGraph::new(true, [0usize, 1, 2], [(0, 1), (1, 0), (2, 1)]).unwrap();

        assert_eq!(g.out_neighbors(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.in_neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(g.in_neighbors(2).count(), 0);
        assert_eq!(g.degree(1), 3);
        assert!(!g.adjacent(1, 2));
    }

    prop_compose! {
        fn random_graph()
            (directed in any::<bool>(),
             n in 0usize..=12,
             raw in prop::collection::vec((0usize..12, 0usize..12), 0..=40))
            -> (bool, usize, Vec<(usize, usize)>)
        {
            let edges = if n == 0 {
                Vec::new()
            } else {
                raw.into_iter().map(|(a, b)| (a % n, b % n)).collect()
            };
            (directed, n, edges)
        }
    }

    proptest! {
        // Matrix and sparse storage must answer every query identically.
        #[test]
        fn prop_matrix_matches_sparse((directed, n, edges) in random_graph()) {
            let matrix = MatrixGraph::new(directed, 0..n, edges.iter().copied()).unwrap();
            let sparse = SparseGraph::new(directed, 0..n, edges.iter().copied()).unwrap();

            prop_assert_eq!(matrix.edge_count(), sparse.edge_count());
            for v in 0..n {
                prop_assert_eq!(matrix.degree(v), sparse.degree(v));
                prop_assert_eq!(
                    matrix.out_neighbors(v).collect::<Vec<_>>(),
                    sparse.out_neighbors(v).collect::<Vec<_>>()
                );
                prop_assert_eq!(
                    matrix.in_neighbors(v).collect::<Vec<_>>(),
                    sparse.in_neighbors(v).collect::<Vec<_>>()
                );
                for w in 0..n {
                    prop_assert_eq!(matrix.adjacent(v, w), sparse.adjacent(v, w));
                }
            }
        }
    }
}
