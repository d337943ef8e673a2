use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::{
    algorithms::components::GraphComponents,
    graphs::graph::{Graph, Node},
    metrics::metric::{GlobalMetric, MetricValue, NodeMetric},
};

/// Summary statistics of a collection of values.
///
/// All fields are 0 for an empty collection. `std_dev` is the population
/// standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return Self::default();
        }
        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        Self {
            count,
            sum,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Per-node values of one metric together with their summary.
#[derive(Debug, Clone)]
pub struct NodeDistribution<N> {
    values: FxHashMap<N, f64>,
    summary: Summary,
}

impl<N: Node> NodeDistribution<N> {
    fn new(values: FxHashMap<N, f64>) -> Self {
        let summary = Summary::of(values.values().copied());
        Self { values, summary }
    }

    pub fn value(&self, node: N) -> Option<f64> {
        self.values.get(&node).copied()
    }

    pub fn values(&self) -> &FxHashMap<N, f64> {
        &self.values
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Lazily computed, memoized metric results for one graph.
///
/// Each metric is evaluated on first request and cached under its name;
/// cached entries are never recomputed. Names therefore act as metric
/// identity and must not be reused for different computations. Discard the instance if the graph
/// it describes is replaced. Not meant to be shared between threads.
pub struct GraphStats<'g, G: Graph> {
    graph: &'g G,
    components: Option<GraphComponents<'g, G>>,
    node_stats: FxHashMap<String, NodeDistribution<G::Node>>,
    global_stats: FxHashMap<String, f64>,
}

impl<'g, G: Graph> GraphStats<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            components: None,
            node_stats: FxHashMap::default(),
            global_stats: FxHashMap::default(),
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn components(&mut self) -> &GraphComponents<'g, G> {
        let graph = self.graph;
        self.components
            .get_or_insert_with(|| GraphComponents::new(graph))
    }

    /// Per-node values and summary of `metric`, computed once.
    pub fn node_stats<M: NodeMetric>(&mut self, metric: &M) -> &NodeDistribution<G::Node> {
        let graph = self.graph;
        self.node_stats
            .entry(metric.name().to_owned())
            .or_insert_with(|| {
                debug!(metric = metric.name(), "computing node metric");
                let values = metric
                    .apply_all(graph)
                    .into_iter()
                    .map(|(n, v)| (n, v.to_f64()))
                    .collect();
                NodeDistribution::new(values)
            })
    }

    /// Value of `metric` for the whole graph, computed once.
    pub fn global_stats<M: GlobalMetric>(&mut self, metric: &M) -> f64 {
        let graph = self.graph;
        *self
            .global_stats
            .entry(metric.name().to_owned())
            .or_insert_with(|| {
                debug!(metric = metric.name(), "computing global metric");
                metric.apply(graph).to_f64()
            })
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.node_stats.contains_key(name) || self.global_stats.contains_key(name)
    }
}
