//! Iterative (force-directed) layout: a thread-shared position store and
//! the step algorithms that drive it.

pub mod point;
pub mod spring;
pub mod state;

pub use point::Point;
pub use spring::{LayoutAlgorithm, SpringLayout, SpringLayoutParameters};
pub use state::IterativeGraphLayoutState;
