use std::{iter::Copied, slice::Iter};

use rustc_hash::FxHashMap;

use crate::{
    error::{GraphError, Result},
    graphs::graph::Node,
};

/// Bijection between the nodes of a graph and the dense integers
/// `0..len()`.
///
/// Storage strategies keep adjacency over indices and translate through
/// this lookup at their boundary. Indices follow declaration order and
/// duplicates are dropped on construction.
#[derive(Debug, Clone)]
pub struct NodeIndex<N: Node> {
    nodes: Vec<N>,
    positions: FxHashMap<N, usize>,
}

impl<N: Node> Default for NodeIndex<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<N: Node> FromIterator<N> for NodeIndex<N> {
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        let mut index = Self::default();
        for node in nodes {
            if !index.positions.contains_key(&node) {
                index.positions.insert(node, index.nodes.len());
                index.nodes.push(node);
            }
        }
        index
    }
}

impl<N: Node> NodeIndex<N> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn index_of(&self, node: N) -> Option<usize> {
        self.positions.get(&node).copied()
    }

    #[inline]
    pub fn node(&self, index: usize) -> Option<N> {
        self.nodes.get(index).copied()
    }

    #[inline]
    pub fn contains(&self, node: N) -> bool {
        self.positions.contains_key(&node)
    }

    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    pub fn iter(&self) -> Copied<Iter<'_, N>> {
        self.nodes.iter().copied()
    }

    /// Translates a list of node pairs into index pairs.
    ///
    /// Fails on the first pair with an endpoint outside the index.
    pub fn index_edges<I>(&self, edges: I) -> Result<Vec<(usize, usize)>>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        edges
            .into_iter()
            .map(|(from, to)| {
                let source = self
                    .index_of(from)
                    .ok_or_else(|| GraphError::undeclared(&from, &from, &to))?;
                let target = self
                    .index_of(to)
                    .ok_or_else(|| GraphError::undeclared(&to, &from, &to))?;
                Ok((source, target))
            })
            .collect()
    }

    /// Iterator translating a slice of indices back into nodes.
    pub fn resolve<'a>(&'a self, indices: &'a [usize]) -> IndexedNodes<'a, N> {
        IndexedNodes {
            index: self,
            indices: indices.iter(),
        }
    }
}

/// Iterator over nodes named by a slice of dense indices.
pub struct IndexedNodes<'a, N: Node> {
    index: &'a NodeIndex<N>,
    indices: Iter<'a, usize>,
}

impl<N: Node> Iterator for IndexedNodes<'_, N> {
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|&i| self.index.nodes[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<N: Node> ExactSizeIterator for IndexedNodes<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_first_position() {
        let index: NodeIndex<char> = ['b', 'a', 'b', 'c', 'a'].into_iter().collect();

        assert_eq!(index.len(), 3);
        assert_eq!(index.as_slice(), &['b', 'a', 'c']);
        assert_eq!(index.index_of('b'), Some(0));
        assert_eq!(index.index_of('c'), Some(2));
        assert_eq!(index.index_of('z'), None);
        assert_eq!(index.node(1), Some('a'));
        assert_eq!(index.node(3), None);
    }

    #[test]
    fn index_edges_rejects_undeclared_endpoint() {
        let index: NodeIndex<u32> = [1, 2, 3].into_iter().collect();

        assert_eq!(index.index_edges([(1, 2), (3, 1)]), Ok(vec![(0, 1), (2, 0)]));

        let err = index.index_edges([(1, 2), (2, 9)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::UndeclaredNode {
                node: "9".into(),
                from: "2".into(),
                to: "9".into(),
            }
        );
    }

    #[test]
    fn resolve_maps_indices_back() {
        let index: NodeIndex<&str> = ["x", "y", "z"].into_iter().collect();
        let rows = [2, 0];
        let resolved: Vec<_> = index.resolve(&rows).collect();
        assert_eq!(resolved, vec!["z", "x"]);
    }
}
