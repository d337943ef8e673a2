/// Compressed Sparse Row (CSR) adjacency over dense indices.
///
/// Rows are numbered from zero up to `row_count - 1`. The neighbors of row
/// `u` are stored in a contiguous, strictly increasing segment of the
/// indices array given by the half open range `offsets[u]` up to
/// `offsets[u + 1]`.
///
/// The length of `offsets` is `row_count + 1`.
/// `offsets[0]` is always zero.
/// `offsets[row_count]` is always equal to `indices.len()`.
/// Parallel pairs collapse on construction, so every row is a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csr {
    /// Row offsets for the CSR layout.
    offsets: Box<[usize]>,

    /// Concatenated, per-row sorted column indices.
    indices: Box<[usize]>,
}

impl Default for Csr {
    /// Empty CSR with no rows.
    fn default() -> Self {
        Self {
            offsets: Box::from([0]),
            indices: Box::new([]),
        }
    }
}

impl Csr {
    /// Builds a CSR with `row_count` rows from a list of `(row, column)`
    /// pairs.
    ///
    /// Rows without pairs are kept (empty). Every row index must be smaller
    /// than `row_count`.
    pub fn new(row_count: usize, mut pairs: Vec<(usize, usize)>) -> Self {
        // sort by row then column so rows become contiguous and sorted.
        pairs.sort_unstable();
        pairs.dedup();

        debug_assert!(
            pairs.iter().all(|&(row, _)| row < row_count),
            "Csr::new: row out of range {row_count}"
        );

        let mut offsets = vec![0usize; row_count + 1];
        for &(row, _) in &pairs {
            offsets[row + 1] += 1;
        }
        for row in 0..row_count {
            offsets[row + 1] += offsets[row];
        }

        let indices: Vec<usize> = pairs.into_iter().map(|(_, column)| column).collect();
        debug_assert_eq!(offsets[row_count], indices.len());

        Self {
            offsets: offsets.into_boxed_slice(),
            indices: indices.into_boxed_slice(),
        }
    }

    /// Same rows, every pair reversed.
    pub fn transpose(&self) -> Self {
        let pairs = (0..self.row_count())
            .flat_map(|row| self.row(row).iter().map(move |&column| (column, row)))
            .collect();
        Self::new(self.row_count(), pairs)
    }

    pub fn row_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Number of stored `(row, column)` pairs.
    pub fn pair_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the half open range of `indices` holding the given row.
    ///
    /// Returns None when row is out of range.
    #[inline]
    pub fn neighbor_range(&self, row: usize) -> Option<(usize, usize)> {
        let start = *self.offsets.get(row)?;
        // CSR is closed by an additional offset marking the length of the indices.
        let end = *self.offsets.get(row + 1)?;
        Some((start, end))
    }

    /// Sorted columns of a row; empty when the row is out of range.
    #[inline]
    pub fn row(&self, row: usize) -> &[usize] {
        match self.neighbor_range(row) {
            Some((start, end)) => &self.indices[start..end],
            None => &[],
        }
    }

    #[inline]
    pub fn row_len(&self, row: usize) -> usize {
        self.row(row).len()
    }

    /// Binary search within one row.
    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.row(row).binary_search(&column).is_ok()
    }
}
