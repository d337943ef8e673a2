use crate::{
    error::{GraphError, Result},
    graphs::{
        contracted::ContractedGraph,
        graph::{Graph, NodeSet},
    },
    metrics::metric::{MetricValue, NodeMetric},
};

/// Value computed for a set of nodes of a graph.
pub trait SubsetMetric {
    type Value: MetricValue;

    /// Identity of the computation; distinct computations need distinct
    /// names, as for [`NodeMetric::name`](crate::metrics::NodeMetric::name).
    fn name(&self) -> &str;

    fn apply<G: Graph>(&self, graph: &G, subset: &NodeSet<G::Node>) -> Result<Self::Value>;
}

/// Sum of a node metric over the subset members present in the graph.
///
/// The empty subset sums to 0.
#[derive(Debug, Clone)]
pub struct AdditiveSubsetMetric<M> {
    base: M,
    name: String,
}

impl<M: NodeMetric> AdditiveSubsetMetric<M> {
    pub fn new(base: M) -> Self {
        let name = format!("additive {}", base.name());
        Self { base, name }
    }

    pub fn base(&self) -> &M {
        &self.base
    }
}

impl<M: NodeMetric> SubsetMetric for AdditiveSubsetMetric<M> {
    type Value = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn apply<G: Graph>(&self, graph: &G, subset: &NodeSet<G::Node>) -> Result<f64> {
        Ok(subset
            .iter()
            .filter(|&&n| graph.contains(n))
            .map(|&n| self.base.apply(graph, n).to_f64())
            .sum())
    }
}

/// Contracts the subset into one node and evaluates a node metric there.
///
/// The representative is the first subset member in graph node order. The
/// base metric should be meaningful on the contracted graph; on a
/// disconnected graph the result is whatever the base metric gives.
#[derive(Debug, Clone)]
pub struct ContractiveSubsetMetric<M> {
    base: M,
    name: String,
}

impl<M: NodeMetric> ContractiveSubsetMetric<M> {
    pub fn new(base: M) -> Self {
        let name = format!("contractive {}", base.name());
        Self { base, name }
    }

    pub fn base(&self) -> &M {
        &self.base
    }
}

impl<M: NodeMetric> SubsetMetric for ContractiveSubsetMetric<M> {
    type Value = M::Value;

    fn name(&self) -> &str {
        &self.name
    }

    /// Fails with [`GraphError::EmptySubset`] when no subset member is a
    /// node of `graph`.
    fn apply<G: Graph>(&self, graph: &G, subset: &NodeSet<G::Node>) -> Result<M::Value> {
        let representative = graph
            .nodes()
            .find(|n| subset.contains(n))
            .ok_or(GraphError::EmptySubset)?;
        let contracted = ContractedGraph::new(graph, subset.iter().copied(), representative);
        Ok(self.base.apply(&contracted, representative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::factory::create_graph,
        metrics::basic::{Closeness, Degree},
    };

    fn subset(nodes: &[u8]) -> NodeSet<u8> {
        nodes.iter().copied().collect()
    }

    #[test]
    fn additive_sums_member_values() {
        // path 0 - 1 - 2 - 3
        let g = create_graph(false, 0..4u8, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let metric = AdditiveSubsetMetric::new(Degree);

        assert_eq!(metric.name(), "additive degree");
        assert_eq!(metric.apply(&g, &subset(&[0, 1])), Ok(3.0));
        assert_eq!(metric.apply(&g, &subset(&[0, 9])), Ok(1.0), "absent nodes skipped");
        assert_eq!(metric.apply(&g, &subset(&[])), Ok(0.0));
    }

    #[test]
    fn contractive_counts_outside_neighbors() {
        // path 0 - 1 - 2 - 3; {1, 2} contracted sees 0, 3 and its own loop
        let g = create_graph(false, 0..4u8, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let metric = ContractiveSubsetMetric::new(Degree);

        assert_eq!(metric.apply(&g, &subset(&[2, 1])), Ok(4));
        assert_eq!(metric.apply(&g, &subset(&[0])), Ok(1));
    }

    #[test]
    fn contractive_rejects_empty_subset() {
        let g = create_graph(false, 0..2u8, [(0, 1)]).unwrap();
        let metric = ContractiveSubsetMetric::new(Degree);

        assert_eq!(metric.apply(&g, &subset(&[])), Err(GraphError::EmptySubset));
        assert_eq!(metric.apply(&g, &subset(&[5])), Err(GraphError::EmptySubset));
    }

    #[test]
    fn contractive_closeness_of_center() {
        // star with hub 0; contracting {0, 1} keeps every other node one step away
        let g = create_graph(false, 0..5u8, [(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let metric = ContractiveSubsetMetric::new(Closeness);

        let value = metric.apply(&g, &subset(&[1, 0])).unwrap();
        assert!((value - 1.0).abs() < 1e-12, "{value}");
    }
}
