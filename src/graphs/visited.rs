use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Marks values as seen during a traversal.
pub trait Visited<V>: Default {
    /// Marks `value`; returns true on the first visit.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;

    /// Number of distinct values visited so far.
    fn visited_count(&self) -> usize;
}

impl<V> Visited<V> for FxHashSet<V>
where
    V: Eq + Hash + Copy,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }

    #[inline]
    fn visited_count(&self) -> usize {
        self.len()
    }
}
