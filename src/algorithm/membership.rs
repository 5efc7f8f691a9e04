//! Visited-cell membership tracking

use bitvec::prelude::*;

/// Fixed-size bitset over flat cell indices
///
/// Tracks which logical cells the spanning tree has absorbed. Provides
/// O(1) membership testing against the walk termination condition.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    capacity: usize,
}

impl CellSet {
    /// Create a set with no cells present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Insert a cell index, ignoring indices beyond capacity
    pub fn insert(&mut self, cell: usize) {
        if cell < self.capacity {
            self.bits.set(cell, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: usize) -> bool {
        self.bits.get(cell).as_deref() == Some(&true)
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remove every cell from the set
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}
