use std::mem;

/// Layer-by-layer worklist.
///
/// Each call to [`Frontier::step`] hands the current layer to an expansion
/// closure, which pushes the next layer into a reusable buffer.
pub trait Frontier<T> {
    fn step<F>(&mut self, expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>);
}

/// Breadth-first frontier that also counts how many layers were handed out.
///
/// The layer returned by the `k`-th successful step lies at depth `k - 1`
/// from the initial layer.
#[derive(Debug)]
pub struct LayeredFrontier<T> {
    frontier: Vec<T>,
    next: Vec<T>,
    depth: usize,
}

impl<T> Default for LayeredFrontier<T> {
    fn default() -> Self {
        Self {
            frontier: Vec::new(),
            next: Vec::new(),
            depth: 0,
        }
    }
}

impl<T> LayeredFrontier<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self {
            frontier: initial.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// The layer the next step will expand.
    pub fn layer(&self) -> &[T] {
        &self.frontier
    }

    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// Depth of the layer the next step will return.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<T> Frontier<T> for LayeredFrontier<T> {
    fn step<F>(&mut self, mut expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>),
    {
        if self.frontier.is_empty() {
            return None;
        }

        let current = mem::take(&mut self.frontier);
        self.next.clear();

        expand(&current, &mut self.next);

        self.frontier = mem::take(&mut self.next);
        self.depth += 1;
        Some(current)
    }
}
