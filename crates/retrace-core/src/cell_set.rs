//! Heap-backed bitmap for runtime-sized grids.

/// A set of cell indices for a grid whose size is only known at runtime.
///
/// Works like [`BitSet`](crate::BitSet) but spans as many 64-bit blocks as
/// the grid needs. Used as the visited-cell index during word search,
/// where the grid dimensions come from caller input.
///
/// # Examples
///
/// ```
/// use retrace_core::CellSet;
///
/// let mut visited = CellSet::new(12);
/// assert!(visited.insert(11));
/// assert!(visited.contains(11));
/// visited.remove(11);
/// assert!(visited.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet {
    blocks: Vec<u64>,
    capacity: usize,
}

impl CellSet {
    /// Creates an empty set able to hold indices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            blocks: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Returns the number of indices the set can hold.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an index, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn insert(&mut self, index: usize) -> bool {
        let (block, bit) = self.locate(index);
        let fresh = self.blocks[block] & bit == 0;
        self.blocks[block] |= bit;
        fresh
    }

    /// Removes an index, returning `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn remove(&mut self, index: usize) -> bool {
        let (block, bit) = self.locate(index);
        let present = self.blocks[block] & bit != 0;
        self.blocks[block] &= !bit;
        present
    }

    /// Returns `true` if the index is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let (block, bit) = self.locate(index);
        self.blocks[block] & bit != 0
    }

    /// Returns the number of indices in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|block| block.count_ones() as usize).sum()
    }

    /// Returns `true` if the set contains no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&block| block == 0)
    }

    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.capacity,
            "index out of range: {index} (capacity {})",
            self.capacity
        );
        (index / 64, 1 << (index % 64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CellSet::new(100);
        assert!(set.insert(0));
        assert!(set.insert(63));
        assert!(set.insert(64));
        assert!(set.insert(99));
        assert!(!set.insert(64));
        assert_eq!(set.len(), 4);

        assert!(set.remove(63));
        assert!(!set.remove(63));
        assert!(!set.contains(63));
        assert!(set.contains(64));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty_after_symmetric_removes() {
        let mut set = CellSet::new(130);
        for index in [0, 1, 64, 65, 128, 129] {
            set.insert(index);
        }
        for index in [0, 1, 64, 65, 128, 129] {
            set.remove(index);
        }
        assert!(set.is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of range: 12")]
    fn test_out_of_range_panics() {
        let mut set = CellSet::new(12);
        set.insert(12);
    }
}
