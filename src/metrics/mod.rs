//! Metric evaluation: node and global metrics, their extension to node
//! subsets, and per-graph memoization.

pub mod basic;
pub mod metric;
pub mod stats;
pub mod subset;

pub use metric::{GlobalMetric, MetricValue, NodeMetric, apply_to_components};
pub use stats::{GraphStats, NodeDistribution, Summary};
pub use subset::{AdditiveSubsetMetric, ContractiveSubsetMetric, SubsetMetric};
