//! Doubled grid state backing spanning tree construction
//!
//! A logical grid of `height` by `width` cells is stored as a boolean
//! matrix of `2 * height - 1` by `2 * width - 1` positions. Even/even
//! positions are cells, positions with exactly one odd component are the
//! edge slots between adjacent cells, and odd/odd positions stay unused.

use ndarray::Array2;

use crate::spatial::coordinate::Coordinate;
use crate::spatial::direction::Direction;

/// Boolean doubled grid holding visited cells and present edges
#[derive(Debug, Clone)]
pub struct DoubledGrid {
    /// Marked positions (indexed by doubled row, doubled col)
    cells: Array2<bool>,

    /// Current doubled dimensions (rows, cols)
    dimensions: (usize, usize),
}

impl DoubledGrid {
    /// Create an unmarked doubled grid for the given logical dimensions
    pub fn new(height: usize, width: usize) -> Self {
        let dimensions = (
            (height * 2).saturating_sub(1),
            (width * 2).saturating_sub(1),
        );
        let cells = Array2::from_elem(dimensions, false);

        Self { cells, dimensions }
    }

    /// Get the number of doubled rows
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of doubled columns
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Convert a coordinate to an array index, rejecting out-of-bounds positions
    const fn position(&self, coordinate: Coordinate) -> Option<[usize; 2]> {
        if coordinate.row < 0 || coordinate.col < 0 {
            return None;
        }

        let row = coordinate.row as usize;
        let col = coordinate.col as usize;
        if row >= self.rows() || col >= self.cols() {
            return None;
        }

        Some([row, col])
    }

    /// Whether the position is marked
    ///
    /// Out-of-bounds coordinates read as unmarked.
    pub fn is_marked(&self, coordinate: Coordinate) -> bool {
        self.position(coordinate)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Mark a position, ignoring coordinates outside the grid
    pub fn mark(&mut self, coordinate: Coordinate) {
        if let Some(index) = self.position(coordinate) {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = true;
            }
        }
    }

    /// Reset every position to unmarked
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Whether a two-step move from a cell lands inside the grid
    pub const fn is_valid_step(&self, cell: Coordinate, direction: Direction) -> bool {
        let destination = cell.step(direction, 2);
        destination.row >= 0
            && destination.col >= 0
            && (destination.row as usize) < self.rows()
            && (destination.col as usize) < self.cols()
    }

    /// Coordinates of every cell position in row-major order
    pub fn cell_coordinates(&self) -> Vec<Coordinate> {
        let mut cells = Vec::with_capacity(self.rows().div_ceil(2) * self.cols().div_ceil(2));
        for row in (0..self.rows()).step_by(2) {
            for col in (0..self.cols()).step_by(2) {
                cells.push(Coordinate::new(row as i32, col as i32));
            }
        }
        cells
    }

    /// Coordinates of every edge slot in row-major order
    pub fn edge_coordinates(&self) -> Vec<Coordinate> {
        let mut slots = Vec::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let coordinate = Coordinate::new(row as i32, col as i32);
                if coordinate.is_edge_slot() {
                    slots.push(coordinate);
                }
            }
        }
        slots
    }
}
