use std::f64::consts::PI;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GraphError, Result},
    graphs::graph::Graph,
    layout::point::Point,
};

/// Node count above which force accumulation runs on the rayon pool.
const PARALLEL_THRESHOLD: usize = 256;

/// Angle increment used to spread coincident nodes apart.
const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_79);

/// One step of an iterative layout.
pub trait LayoutAlgorithm {
    /// Advances `positions` and `velocities` by one step and returns the
    /// kinetic energy of the result.
    ///
    /// Both maps hold an entry for every node of `graph`. `cooling` scales
    /// the step and shrinks over the run.
    fn step<G: Graph>(
        &self,
        graph: &G,
        positions: &mut FxHashMap<G::Node, Point>,
        velocities: &mut FxHashMap<G::Node, Point>,
        cooling: f64,
    ) -> f64;

    /// Cooling value for the step after one taking `cooling`.
    fn cool(&self, cooling: f64) -> f64 {
        cooling
    }
}

/// Tuning of [`SpringLayout`]. Missing fields deserialize to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringLayoutParameters {
    /// Stiffness of the spring along each edge.
    pub spring_constant: f64,
    /// Rest length of an edge spring.
    pub spring_length: f64,
    /// Strength of the inverse-square repulsion between every two nodes.
    pub repulsion: f64,
    /// Share of the velocity kept from one step to the next, in `[0, 1]`.
    pub damping: f64,
    /// Upper bound on how far a node moves in one step.
    pub max_step: f64,
    /// Distances below this count as this for repulsion.
    pub min_distance: f64,
    pub initial_cooling: f64,
    /// Factor applied to the cooling scalar after each step, in `(0, 1]`.
    pub cooling_rate: f64,
    pub min_cooling: f64,
}

impl Default for SpringLayoutParameters {
    fn default() -> Self {
        Self {
            spring_constant: 0.1,
            spring_length: 50.0,
            repulsion: 2500.0,
            damping: 0.5,
            max_step: 25.0,
            min_distance: 1.0,
            initial_cooling: 1.0,
            cooling_rate: 0.99,
            min_cooling: 0.1,
        }
    }
}

impl SpringLayoutParameters {
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("spring_constant", self.spring_constant >= 0.0),
            ("spring_length", self.spring_length > 0.0),
            ("repulsion", self.repulsion >= 0.0),
            ("damping", (0.0..=1.0).contains(&self.damping)),
            ("max_step", self.max_step > 0.0),
            ("min_distance", self.min_distance > 0.0),
            ("initial_cooling", (0.0..=1.0).contains(&self.initial_cooling)),
            ("cooling_rate", self.cooling_rate > 0.0 && self.cooling_rate <= 1.0),
            ("min_cooling", (0.0..=1.0).contains(&self.min_cooling)),
        ];
        match checks.iter().find(|(_, ok)| !ok) {
            Some((name, _)) => Err(GraphError::InvalidParameter(format!(
                "{name} is out of range"
            ))),
            None => Ok(()),
        }
    }
}

/// Force-directed layout: every two nodes repel, edges act as springs.
///
/// Velocities are damped each step and scaled by the cooling scalar, and a
/// single step never moves a node further than `max_step`.
#[derive(Debug, Clone, Default)]
pub struct SpringLayout {
    parameters: SpringLayoutParameters,
}

impl SpringLayout {
    /// Fails with [`GraphError::InvalidParameter`] on out-of-range tuning.
    pub fn new(parameters: SpringLayoutParameters) -> Result<Self> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    pub fn parameters(&self) -> &SpringLayoutParameters {
        &self.parameters
    }

    fn repulsion(&self, from: Point, other: Point, pair: (usize, usize)) -> Point {
        let p = &self.parameters;
        let delta = from - other;
        let direction = if delta.length() > 0.0 {
            delta.normalized()
        } else {
            // coincident: pick a direction fixed by the pair, opposite for the partner
            let (i, j) = pair;
            let angle = (i.min(j) * 31 + i.max(j)) as f64 * GOLDEN_ANGLE;
            let sign = if i < j { 1.0 } else { -1.0 };
            Point::polar(sign, angle)
        };
        let distance = delta.length().max(p.min_distance);
        direction * (p.repulsion / (distance * distance))
    }

    fn spring(&self, from: Point, to: Point) -> Point {
        let p = &self.parameters;
        let delta = to - from;
        let distance = delta.length();
        if distance == 0.0 {
            return Point::ORIGIN;
        }
        delta.normalized() * (p.spring_constant * (distance - p.spring_length))
    }

    fn force<G: Graph>(
        &self,
        graph: &G,
        nodes: &[G::Node],
        points: &[Point],
        index: &FxHashMap<G::Node, usize>,
        i: usize,
    ) -> Point {
        let mut force = Point::ORIGIN;
        for (j, &other) in points.iter().enumerate() {
            if j != i {
                force += self.repulsion(points[i], other, (i, j));
            }
        }
        for neighbor in graph.neighbors(nodes[i]) {
            if let Some(&j) = index.get(&neighbor)
                && j != i
            {
                force += self.spring(points[i], points[j]);
            }
        }
        force
    }
}

impl LayoutAlgorithm for SpringLayout {
    fn step<G: Graph>(
        &self,
        graph: &G,
        positions: &mut FxHashMap<G::Node, Point>,
        velocities: &mut FxHashMap<G::Node, Point>,
        cooling: f64,
    ) -> f64 {
        let nodes: Vec<G::Node> = graph.nodes().collect();
        let points: Vec<Point> = nodes
            .iter()
            .map(|n| positions.get(n).copied().unwrap_or_default())
            .collect();
        let index: FxHashMap<G::Node, usize> =
            nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        let forces: Vec<Point> = if nodes.len() > PARALLEL_THRESHOLD {
            (0..nodes.len())
                .into_par_iter()
                .map(|i| self.force(graph, &nodes, &points, &index, i))
                .collect()
        } else {
            (0..nodes.len())
                .map(|i| self.force(graph, &nodes, &points, &index, i))
                .collect()
        };

        let p = &self.parameters;
        let mut energy = 0.0;
        for ((&node, &point), force) in nodes.iter().zip(&points).zip(forces) {
            let previous = velocities.get(&node).copied().unwrap_or_default();
            let velocity = ((previous + force) * (p.damping * cooling)).capped(p.max_step);
            energy += velocity.length().powi(2);
            velocities.insert(node, velocity);
            positions.insert(node, point + velocity);
        }
        energy
    }

    fn cool(&self, cooling: f64) -> f64 {
        (cooling * self.parameters.cooling_rate).max(self.parameters.min_cooling)
    }
}
