//! Structural algorithms written against the [`Graph`](crate::Graph) trait
//! only, so they run unchanged on storage strategies and live views.

pub mod components;
pub mod contraction;
pub mod geodesic;
pub mod matrix_powers;
pub mod shortest_paths;

pub use components::{GraphComponents, components};
pub use contraction::contracted_graph;
pub use geodesic::{geodesic_distance, geodesic_distances, geodesic_tree, neighborhood};
pub use matrix_powers::{CountMatrix, adjacency_matrix, adjacency_matrix_powers};
pub use shortest_paths::{ShortestPaths, breadth_first_search};

pub use crate::graphs::{factory::copy_graph, graph::describe};
