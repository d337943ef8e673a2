use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    graphs::graph::{Graph, Node, NodeSet},
    layout::{
        point::Point,
        spring::{LayoutAlgorithm, SpringLayoutParameters},
    },
};

/// Everything guarded by the layout lock.
#[derive(Debug)]
struct LayoutBuffers<N> {
    positions: FxHashMap<N, Point>,
    velocities: FxHashMap<N, Point>,
    /// Positions requested from outside, merged at the next sync.
    staged: FxHashMap<N, Point>,
    reset_nodes: bool,
}

impl<N> Default for LayoutBuffers<N> {
    fn default() -> Self {
        Self {
            positions: FxHashMap::default(),
            velocities: FxHashMap::default(),
            staged: FxHashMap::default(),
            reset_nodes: false,
        }
    }
}

/// Positions and velocities of a running iterative layout, shared between
/// one layout thread and any number of requester threads.
///
/// Requesters only stage positions and read copies. The layout thread
/// merges staged positions at one point per step, in
/// [`node_location_sync`](Self::node_location_sync), so each step sees a
/// consistent snapshot.
///
/// The cooling scalar lives outside the lock. Only the layout thread writes
/// it.
#[derive(Debug)]
pub struct IterativeGraphLayoutState<N> {
    buffers: Mutex<LayoutBuffers<N>>,
    /// Bits of an `f64`.
    cooling: AtomicU64,
    iteration: AtomicUsize,
}

impl<N: Node> Default for IterativeGraphLayoutState<N> {
    fn default() -> Self {
        Self::with_parameters(&SpringLayoutParameters::default())
    }
}

impl<N: Node> IterativeGraphLayoutState<N> {
    pub fn new(initial_cooling: f64) -> Self {
        Self {
            buffers: Mutex::new(LayoutBuffers::default()),
            cooling: AtomicU64::new(initial_cooling.to_bits()),
            iteration: AtomicUsize::new(0),
        }
    }

    /// Empty state whose cooling starts at `parameters.initial_cooling`.
    pub fn with_parameters(parameters: &SpringLayoutParameters) -> Self {
        Self::new(parameters.initial_cooling)
    }

    /// Stages `positions` for the next sync, replacing any earlier request
    /// that has not been consumed yet.
    ///
    /// Live positions are untouched until the layout thread syncs.
    pub fn request_positions(
        &self,
        positions: impl IntoIterator<Item = (N, Point)>,
        reset_nodes: bool,
    ) {
        let staged: FxHashMap<N, Point> = positions.into_iter().collect();
        let mut buffers = self.buffers.lock();
        buffers.staged = staged;
        buffers.reset_nodes = reset_nodes;
    }

    pub fn positions_copy(&self) -> FxHashMap<N, Point> {
        self.buffers.lock().positions.clone()
    }

    pub fn velocities_copy(&self) -> FxHashMap<N, Point> {
        self.buffers.lock().velocities.clone()
    }

    pub fn cooling_parameter(&self) -> f64 {
        f64::from_bits(self.cooling.load(Ordering::Relaxed))
    }

    /// Layout thread only.
    pub fn set_cooling_parameter(&self, cooling: f64) {
        self.cooling.store(cooling.to_bits(), Ordering::Relaxed);
    }

    /// Number of completed calls to [`iterate`](Self::iterate).
    pub fn iteration(&self) -> usize {
        self.iteration.load(Ordering::Relaxed)
    }

    /// Brings the live maps in line with `current_nodes` and consumes the
    /// staged request, all under the lock:
    ///
    /// 1. nodes outside `current_nodes` are dropped;
    /// 2. staged positions of current nodes are applied, with zero velocity;
    /// 3. on a reset request, the live nodes are further restricted to
    ///    `current_nodes ∩ (staged ∪ current_nodes)`;
    /// 4. the staged positions and the reset flag are cleared;
    /// 5. current nodes still without a position start at the origin, at
    ///    rest.
    pub fn node_location_sync(&self, current_nodes: &NodeSet<N>) {
        let mut guard = self.buffers.lock();
        let buffers = &mut *guard;

        buffers.positions.retain(|n, _| current_nodes.contains(n));
        buffers.velocities.retain(|n, _| current_nodes.contains(n));

        let mut applied = 0usize;
        for (&node, &position) in &buffers.staged {
            if current_nodes.contains(&node) {
                buffers.positions.insert(node, position);
                buffers.velocities.insert(node, Point::ORIGIN);
                applied += 1;
            }
        }

        if buffers.reset_nodes {
            let keep: NodeSet<N> = buffers
                .staged
                .keys()
                .chain(current_nodes)
                .copied()
                .filter(|n| current_nodes.contains(n))
                .collect();
            buffers.positions.retain(|n, _| keep.contains(n));
            buffers.velocities.retain(|n, _| keep.contains(n));
        }

        if !buffers.staged.is_empty() {
            debug!(
                staged = buffers.staged.len(),
                applied,
                reset = buffers.reset_nodes,
                "merged requested layout positions"
            );
        }
        buffers.staged.clear();
        buffers.reset_nodes = false;

        for &node in current_nodes {
            buffers.positions.entry(node).or_insert(Point::ORIGIN);
            buffers.velocities.entry(node).or_insert(Point::ORIGIN);
        }
    }

    /// Runs one layout step over the nodes of `graph` and returns its
    /// energy.
    ///
    /// Syncs first, then steps on a copy of the live maps without holding
    /// the lock, writes the result back and cools.
    pub fn iterate<G, A>(&self, graph: &G, algorithm: &A) -> f64
    where
        G: Graph<Node = N>,
        A: LayoutAlgorithm,
    {
        let current: NodeSet<N> = graph.nodes().collect();
        self.node_location_sync(&current);

        let (mut positions, mut velocities) = {
            let buffers = self.buffers.lock();
            (buffers.positions.clone(), buffers.velocities.clone())
        };

        let cooling = self.cooling_parameter();
        let energy = algorithm.step(graph, &mut positions, &mut velocities, cooling);

        {
            let mut buffers = self.buffers.lock();
            buffers.positions = positions;
            buffers.velocities = velocities;
        }

        self.set_cooling_parameter(algorithm.cool(cooling));
        let iteration = self.iteration.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(iteration, energy, cooling, "layout step");
        energy
    }
}
