//! Unvisited cell pool with constant-time removal
//!
//! The walk loop removes cells in arbitrary order as the tree absorbs
//! them, so the pool pairs a dense vector with an index map and removes
//! by swapping the last entry into the vacated slot.

use std::collections::HashMap;

use crate::spatial::coordinate::Coordinate;

/// Pool of cells not yet absorbed into the spanning tree
#[derive(Debug, Clone, Default)]
pub struct CellPool {
    entries: Vec<Coordinate>,
    index_of: HashMap<Coordinate, usize>,
}

impl CellPool {
    /// Create an empty pool sized for `capacity` cells
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index_of: HashMap::with_capacity(capacity),
        }
    }

    /// Replace the pool contents with the given cells
    pub fn fill(&mut self, cells: Vec<Coordinate>) {
        self.entries = cells;
        self.index_of.clear();
        for (index, cell) in self.entries.iter().enumerate() {
            self.index_of.insert(*cell, index);
        }
    }

    /// Number of cells still in the pool
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test whether the pool has drained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the cell at a position without removing it
    pub fn peek(&self, index: usize) -> Option<Coordinate> {
        self.entries.get(index).copied()
    }

    /// Remove and return the cell at a position
    ///
    /// The last entry is swapped into the vacated slot, so positions of
    /// remaining cells are not stable across calls.
    pub fn take(&mut self, index: usize) -> Option<Coordinate> {
        if index >= self.entries.len() {
            return None;
        }

        let removed = self.entries.swap_remove(index);
        self.index_of.remove(&removed);
        if let Some(moved) = self.entries.get(index) {
            self.index_of.insert(*moved, index);
        }

        Some(removed)
    }

    /// Remove a specific cell, reporting whether it was present
    pub fn remove(&mut self, cell: Coordinate) -> bool {
        match self.index_of.get(&cell).copied() {
            Some(index) => self.take(index).is_some(),
            None => false,
        }
    }
}
