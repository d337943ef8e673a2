//! Construction entry points.
//!
//! [`create_graph`] picks the storage strategy from the node and edge
//! counts; [`sparse_graph`] and [`matrix_graph`] force one. All of them fail
//! fast when an edge names a node outside the declared node set.

use tracing::debug;

use crate::{
    error::Result,
    graphs::{
        graph::{Graph, Node},
        index::NodeIndex,
        matrix::MatrixGraph,
        sparse::SparseGraph,
        stored::StoredGraph,
    },
};

/// Graphs with at most this many nodes always use the matrix strategy.
pub const SMALL_GRAPH_NODES: usize = 50;

/// Upper node bound for the dense-graph rule.
pub const DENSE_GRAPH_NODES: usize = 100;

/// Edge count above which a graph of at most [`DENSE_GRAPH_NODES`] nodes
/// uses the matrix strategy.
pub const DENSE_GRAPH_EDGES: usize = 1000;

/// Returns true when an adjacency matrix is the better representation for a
/// graph with the given node and edge counts.
pub fn prefers_matrix(node_count: usize, edge_count: usize) -> bool {
    node_count <= SMALL_GRAPH_NODES
        || (node_count <= DENSE_GRAPH_NODES && edge_count > DENSE_GRAPH_EDGES)
}

/// Builds a graph, choosing the storage strategy with [`prefers_matrix`].
///
/// The edge count used for the decision is the number of declared pairs,
/// before parallel edges collapse.
pub fn create_graph<N, I, E>(directed: bool, nodes: I, edges: E) -> Result<StoredGraph<N>>
where
    N: Node,
    I: IntoIterator<Item = N>,
    E: IntoIterator<Item = (N, N)>,
{
    let index: NodeIndex<N> = nodes.into_iter().collect();
    let pairs = index.index_edges(edges)?;

    if prefers_matrix(index.len(), pairs.len()) {
        debug!(
            nodes = index.len(),
            edges = pairs.len(),
            directed,
            "using adjacency matrix storage"
        );
        Ok(MatrixGraph::from_index_pairs(directed, index, pairs).into())
    } else {
        debug!(
            nodes = index.len(),
            edges = pairs.len(),
            directed,
            "using adjacency list storage"
        );
        Ok(SparseGraph::from_index_pairs(directed, index, pairs).into())
    }
}

/// Builds an adjacency-list backed graph regardless of density.
pub fn sparse_graph<N, I, E>(directed: bool, nodes: I, edges: E) -> Result<StoredGraph<N>>
where
    N: Node,
    I: IntoIterator<Item = N>,
    E: IntoIterator<Item = (N, N)>,
{
    SparseGraph::new(directed, nodes, edges).map(StoredGraph::from)
}

/// Builds an adjacency-matrix backed graph regardless of density.
pub fn matrix_graph<N, I, E>(directed: bool, nodes: I, edges: E) -> Result<StoredGraph<N>>
where
    N: Node,
    I: IntoIterator<Item = N>,
    E: IntoIterator<Item = (N, N)>,
{
    MatrixGraph::new(directed, nodes, edges).map(StoredGraph::from)
}

/// Materializes any graph, including live views, into storage.
///
/// Node order and orientation are preserved.
pub fn copy_graph<G: Graph + ?Sized>(graph: &G) -> Result<StoredGraph<G::Node>> {
    create_graph(graph.is_directed(), graph.nodes(), graph.edges())
}
