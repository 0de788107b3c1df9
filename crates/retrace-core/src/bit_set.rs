//! Fixed-width bitmask index sets.

use std::{
    fmt::Debug,
    ops::{BitAnd, BitOr, Not, Shl},
};

/// An unsigned primitive usable as bitmask storage for [`BitSet`].
///
/// Implemented for `u32` and `u64`. The trait exists so occupancy masks of
/// different widths (32 queen columns, 63 board diagonals) share one set
/// implementation.
pub trait Bits:
    Copy
    + Eq
    + Debug
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// The all-zeroes value.
    const ZERO: Self;
    /// The value with only the lowest bit set.
    const ONE: Self;
    /// Number of distinct indices the storage can hold.
    const WIDTH: u32;

    /// Number of set bits.
    fn count_ones(self) -> u32;
}

impl Bits for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const WIDTH: u32 = 32;

    fn count_ones(self) -> u32 {
        self.count_ones()
    }
}

impl Bits for u64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const WIDTH: u32 = 64;

    fn count_ones(self) -> u32 {
        self.count_ones()
    }
}

/// A set of small indices backed by a single machine word.
///
/// Membership, insertion, and removal are single bit operations. This is
/// the occupancy index used on the hottest search paths (queen columns and
/// diagonals), where a hash set or sorted vector would dominate the cost
/// of the whole search.
///
/// # Examples
///
/// ```
/// use retrace_core::BitSet;
///
/// let mut columns = BitSet::<u32>::new();
/// assert!(columns.insert(3));
/// assert!(columns.contains(3));
/// assert!(!columns.insert(3));
///
/// columns.remove(3);
/// assert!(columns.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet<B: Bits> {
    bits: B,
}

impl<B: Bits> BitSet<B> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: B::ZERO }
    }

    /// Returns the largest index count the set can hold.
    #[must_use]
    pub const fn capacity() -> u32 {
        B::WIDTH
    }

    /// Inserts an index, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::capacity()`.
    pub fn insert(&mut self, index: u32) -> bool {
        let bit = Self::bit(index);
        let fresh = self.bits & bit == B::ZERO;
        self.bits = self.bits | bit;
        fresh
    }

    /// Removes an index, returning `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::capacity()`.
    pub fn remove(&mut self, index: u32) -> bool {
        let bit = Self::bit(index);
        let present = self.bits & bit != B::ZERO;
        self.bits = self.bits & !bit;
        present
    }

    /// Returns `true` if the index is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::capacity()`.
    #[inline]
    #[must_use]
    pub fn contains(&self, index: u32) -> bool {
        self.bits & Self::bit(index) != B::ZERO
    }

    /// Returns the number of indices in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits == B::ZERO
    }

    fn bit(index: u32) -> B {
        assert!(index < B::WIDTH, "index out of range: {index}");
        B::ONE << index
    }
}

impl<B: Bits> Default for BitSet<B> {
    fn default() -> Self {
        Self::new()
    }
}
