//! Graph storage strategies, structural algorithms, metric caching and a
//! thread-shared state for iterative (force-directed) layouts.
//!
//! Graphs are built once through the factory in [`graphs::factory`] and
//! queried through the [`Graph`] trait. Views ([`FilteredGraph`],
//! [`Subgraph`], [`ContractedGraph`]) answer every query live from a parent
//! graph. Algorithms in [`algorithms`] depend only on the trait.

pub mod algorithms;
pub mod error;
pub mod graphs;
pub mod layout;
pub mod metrics;

pub use algorithms::GraphComponents;
pub use error::{GraphError, Result};
pub use graphs::{
    contracted::ContractedGraph,
    factory::{copy_graph, create_graph, matrix_graph, sparse_graph},
    filtered::FilteredGraph,
    graph::{Graph, Node, NodeSet},
    matrix::MatrixGraph,
    optimized::{DegreeClass, OptimizedGraph},
    sparse::SparseGraph,
    stored::StoredGraph,
    subgraph::Subgraph,
};
pub use layout::{
    IterativeGraphLayoutState, LayoutAlgorithm, Point, SpringLayout, SpringLayoutParameters,
};
pub use metrics::GraphStats;
