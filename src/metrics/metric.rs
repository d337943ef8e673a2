use rustc_hash::FxHashMap;

use crate::{
    algorithms::components::components,
    graphs::{graph::Graph, subgraph::Subgraph},
};

/// A metric result that can be summarized numerically.
pub trait MetricValue {
    fn to_f64(&self) -> f64;
}

macro_rules! numeric_metric_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MetricValue for $ty {
                #[inline]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

numeric_metric_value!(f64, f32, usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

impl MetricValue for bool {
    fn to_f64(&self) -> f64 {
        if *self { 1.0 } else { 0.0 }
    }
}

/// Value computed at one node of a graph.
///
/// Implementations must be pure: the same graph and node always give the
/// same value. [`GraphStats`](crate::metrics::GraphStats) relies on this to
/// cache results under [`NodeMetric::name`].
pub trait NodeMetric {
    type Value: MetricValue;

    /// Identity of the metric, used as cache key.
    ///
    /// Must be unique per distinct computation: two metrics with the same
    /// name share one cached result in
    /// [`GraphStats`](crate::metrics::GraphStats).
    fn name(&self) -> &str;

    fn apply<G: Graph>(&self, graph: &G, node: G::Node) -> Self::Value;

    /// Evaluates every node of `graph`.
    fn apply_all<G: Graph>(&self, graph: &G) -> FxHashMap<G::Node, Self::Value> {
        graph.nodes().map(|n| (n, self.apply(graph, n))).collect()
    }
}

/// Value computed for a whole graph. Pure, like [`NodeMetric`].
pub trait GlobalMetric {
    type Value: MetricValue;

    /// Cache key, unique per distinct computation as for
    /// [`NodeMetric::name`].
    fn name(&self) -> &str;

    fn apply<G: Graph>(&self, graph: &G) -> Self::Value;
}

/// Extends a node metric that is only meaningful on connected graphs to any
/// graph.
///
/// The metric runs on each component's induced subgraph. Nodes of
/// single-node components get 0. Every value of a component with `k` nodes
/// is then scaled by `k / n`, `n` being the node count of the whole graph.
pub fn apply_to_components<G, M>(graph: &G, metric: &M) -> FxHashMap<G::Node, f64>
where
    G: Graph,
    M: NodeMetric,
{
    let total = graph.node_count();
    let mut values = FxHashMap::default();

    for part in components(graph) {
        if part.len() == 1 {
            values.extend(part.into_iter().map(|n| (n, 0.0)));
            continue;
        }
        let scale = part.len() as f64 / total as f64;
        let component = Subgraph::new(graph, part);
        values.extend(
            metric
                .apply_all(&component)
                .into_iter()
                .map(|(n, v)| (n, v.to_f64() * scale)),
        );
    }
    values
}
