pub mod bfs;
pub mod contracted;
pub mod csr;
pub mod factory;
pub mod filtered;
pub mod frontier;
pub mod graph;
pub mod index;
pub mod matrix;
pub mod optimized;
pub mod sparse;
pub mod stored;
pub mod subgraph;
pub mod visited;
