//! Cell adjacency matrix derivation
//!
//! Flattens the doubled grid into a square boolean matrix over logical
//! cell indices. Only down and right edge slots are inspected, then the
//! upper triangle is mirrored so the matrix comes out symmetric.

use ndarray::Array2;

use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::DoubledGrid;

/// Build the adjacency matrix for the marked edges of a doubled grid
///
/// Cell `(row, col)` maps to flat index `row * width + col`. The
/// diagonal stays false since no cell neighbors itself.
pub fn derive_adjacency(grid: &DoubledGrid, height: usize, width: usize) -> Array2<bool> {
    let size = height * width;
    let mut adjacency = Array2::from_elem((size, size), false);

    for row in 0..height {
        for col in 0..width {
            let node = row * width + col;

            let down = Coordinate::new((row * 2 + 1) as i32, (col * 2) as i32);
            if row + 1 < height && grid.is_marked(down) {
                if let Some(entry) = adjacency.get_mut([node, node + width]) {
                    *entry = true;
                }
            }

            let right = Coordinate::new((row * 2) as i32, (col * 2 + 1) as i32);
            if col + 1 < width && grid.is_marked(right) {
                if let Some(entry) = adjacency.get_mut([node, node + 1]) {
                    *entry = true;
                }
            }
        }
    }

    mirror_lower_triangle(&mut adjacency);
    adjacency
}

/// Copy the upper triangle of a square matrix into its lower triangle
pub fn mirror_lower_triangle(adjacency: &mut Array2<bool>) {
    let size = adjacency.nrows();
    for row in 1..size {
        for col in 0..row {
            let value = adjacency.get([col, row]).copied().unwrap_or(false);
            if let Some(entry) = adjacency.get_mut([row, col]) {
                *entry = value;
            }
        }
    }
}
