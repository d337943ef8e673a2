use std::{iter::Copied, slice::Iter};

use rustc_hash::FxHashMap;

use crate::{
    error::{GraphError, Result},
    graphs::{
        filtered::FilteredGraph,
        graph::{Graph, NodeSet},
    },
};

/// Four-way classification of nodes by degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeClass {
    /// Degree 0.
    Isolate,
    /// Degree 1.
    Leaf,
    /// Degree 2.
    Connector,
    /// Degree 3 or more.
    Core,
}

impl DegreeClass {
    pub fn of_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Isolate,
            1 => Self::Leaf,
            2 => Self::Connector,
            _ => Self::Core,
        }
    }
}

/// Per-node facts cached at construction.
#[derive(Debug, Clone)]
struct NodeInfo<N> {
    degree: usize,
    class: DegreeClass,
    out_neighbors: Vec<N>,
    /// Empty for undirected graphs, where predecessors equal successors.
    in_neighbors: Vec<N>,
    neighbors: Vec<N>,
    leaf_neighbors: Vec<N>,
}

/// Wraps a graph and caches degrees, degree classes, neighbor sets and
/// leaf-only neighbor subsets, for algorithms that scan the same graph many
/// times.
///
/// Built in `O(n + m)` and immutable afterwards. The classification totals
/// partition the node set and match the cached degrees.
#[derive(Debug, Clone)]
pub struct OptimizedGraph<G: Graph> {
    base: G,
    order: Vec<G::Node>,
    info: FxHashMap<G::Node, NodeInfo<G::Node>>,
    isolates: Vec<G::Node>,
    leaves: Vec<G::Node>,
    connectors: Vec<G::Node>,
    core: Vec<G::Node>,
}

impl<G: Graph> OptimizedGraph<G> {
    /// Scans `base` once for degrees and neighbor sets, then once more to
    /// flag leaf neighbors.
    ///
    /// Fails when an edge of `base` leads outside its own node set.
    pub fn new(base: G) -> Result<Self> {
        let order: Vec<G::Node> = base.nodes().collect();
        let declared: NodeSet<G::Node> = order.iter().copied().collect();
        let directed = base.is_directed();

        let mut info = FxHashMap::default();
        let mut isolates = Vec::new();
        let mut leaves = Vec::new();
        let mut connectors = Vec::new();
        let mut core = Vec::new();

        for &node in &order {
            let out_neighbors: Vec<G::Node> = base.out_neighbors(node).collect();
            let in_neighbors: Vec<G::Node> = if directed {
                base.in_neighbors(node).collect()
            } else {
                Vec::new()
            };
            if let Some(&stray) = out_neighbors.iter().find(|n| !declared.contains(n)) {
                return Err(GraphError::undeclared(&stray, &node, &stray));
            }
            if let Some(&stray) = in_neighbors.iter().find(|n| !declared.contains(n)) {
                return Err(GraphError::undeclared(&stray, &stray, &node));
            }

            let degree = base.degree(node);
            let class = DegreeClass::of_degree(degree);
            match class {
                DegreeClass::Isolate => isolates.push(node),
                DegreeClass::Leaf => leaves.push(node),
                DegreeClass::Connector => connectors.push(node),
                DegreeClass::Core => core.push(node),
            }

            info.insert(
                node,
                NodeInfo {
                    degree,
                    class,
                    neighbors: base.neighbors(node),
                    out_neighbors,
                    in_neighbors,
                    leaf_neighbors: Vec::new(),
                },
            );
        }

        let leaf_set: NodeSet<G::Node> = leaves.iter().copied().collect();
        for entry in info.values_mut() {
            entry.leaf_neighbors = entry
                .neighbors
                .iter()
                .copied()
                .filter(|n| leaf_set.contains(n))
                .collect();
        }

        debug_assert_eq!(
            isolates.len() + leaves.len() + connectors.len() + core.len(),
            order.len()
        );

        Ok(Self {
            base,
            order,
            info,
            isolates,
            leaves,
            connectors,
            core,
        })
    }

    pub fn base(&self) -> &G {
        &self.base
    }

    pub fn into_base(self) -> G {
        self.base
    }

    /// Nodes of degree 0, in graph order.
    pub fn isolates(&self) -> &[G::Node] {
        &self.isolates
    }

    /// Nodes of degree 1, in graph order.
    pub fn leaves(&self) -> &[G::Node] {
        &self.leaves
    }

    /// Nodes of degree 2, in graph order.
    pub fn connectors(&self) -> &[G::Node] {
        &self.connectors
    }

    /// Nodes of degree 3 or more, in graph order.
    pub fn core_nodes(&self) -> &[G::Node] {
        &self.core
    }

    /// Classification of `node`, `None` when absent.
    pub fn class_of(&self, node: G::Node) -> Option<DegreeClass> {
        self.info.get(&node).map(|info| info.class)
    }

    /// The single neighbor of a leaf.
    ///
    /// Fails when `node` is absent or not classified as a leaf.
    pub fn neighbor_of_leaf(&self, node: G::Node) -> Result<G::Node> {
        let not_a_leaf = || GraphError::NotALeaf {
            node: format!("{node:?}"),
            degree: self.degree(node),
        };
        match self.info.get(&node) {
            Some(info) if info.class == DegreeClass::Leaf => {
                info.neighbors.first().copied().ok_or_else(not_a_leaf)
            }
            _ => Err(not_a_leaf()),
        }
    }

    /// Neighbors of `node` that are themselves leaves.
    pub fn leaf_neighbors(&self, node: G::Node) -> &[G::Node] {
        self.info
            .get(&node)
            .map_or(<&[G::Node]>::default(), |info| info.leaf_neighbors.as_slice())
    }

    /// Live view of the nodes of degree at least 2.
    ///
    /// Degrees are those of the wrapped graph, not recomputed inside the
    /// view.
    pub fn core_view(
        &self,
    ) -> FilteredGraph<'_, Self, impl Fn(G::Node) -> bool + Sync + '_, fn(G::Node, G::Node) -> bool>
    {
        FilteredGraph::with_nodes(self, move |n| self.degree(n) >= 2)
    }
}

impl<G: Graph> Graph for OptimizedGraph<G> {
    type Node = G::Node;

    type Nodes<'a>
        = Copied<Iter<'a, G::Node>>
    where
        Self: 'a;

    type Neighbors<'a>
        = Copied<Iter<'a, G::Node>>
    where
        Self: 'a;

    fn nodes(&self) -> Self::Nodes<'_> {
        self.order.iter().copied()
    }

    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn contains(&self, node: G::Node) -> bool {
        self.info.contains_key(&node)
    }

    fn is_directed(&self) -> bool {
        self.base.is_directed()
    }

    fn out_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        self.info
            .get(&node)
            .map_or(<&[G::Node]>::default(), |info| info.out_neighbors.as_slice())
            .iter()
            .copied()
    }

    fn in_neighbors(&self, node: G::Node) -> Self::Neighbors<'_> {
        let Some(info) = self.info.get(&node) else {
            return <&[G::Node]>::default().iter().copied();
        };
        if self.base.is_directed() {
            info.in_neighbors.iter().copied()
        } else {
            info.out_neighbors.iter().copied()
        }
    }

    fn neighbors(&self, node: G::Node) -> Vec<G::Node> {
        self.info
            .get(&node)
            .map_or_else(Vec::new, |info| info.neighbors.clone())
    }

    fn adjacent(&self, from: G::Node, to: G::Node) -> bool {
        self.base.adjacent(from, to)
    }

    fn degree(&self, node: G::Node) -> usize {
        self.info.get(&node).map_or(0, |info| info.degree)
    }

    fn edge_count(&self) -> usize {
        self.base.edge_count()
    }
}
