//! Signed coordinates over the doubled grid
//!
//! Walk positions are tracked with signed components so a step can leave
//! the grid and be rejected by bounds checking rather than wrapping.

use crate::spatial::direction::Direction;

/// A position on the doubled grid in (row, col) order
///
/// Even components address logical cells, a single odd component addresses
/// the edge slot between two cells. Coordinates are allowed to go negative
/// during walk candidate generation and are validated before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Row on the doubled grid
    pub row: i32,
    /// Column on the doubled grid
    pub col: i32,
}

impl Coordinate {
    /// Create a coordinate from row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move `distance` unit steps in `direction`
    pub const fn step(self, direction: Direction, distance: i32) -> Self {
        let (row_offset, col_offset) = direction.offset();
        Self {
            row: self.row + row_offset * distance,
            col: self.col + col_offset * distance,
        }
    }

    /// Whether both components are even, addressing a logical cell
    pub const fn is_cell(self) -> bool {
        self.row % 2 == 0 && self.col % 2 == 0
    }

    /// Whether exactly one component is odd, addressing an edge slot
    pub const fn is_edge_slot(self) -> bool {
        (self.row % 2 == 0) != (self.col % 2 == 0)
    }

    /// Flat index of the logical cell this coordinate addresses
    ///
    /// Returns `None` for edge slots, unused positions, and coordinates
    /// outside the non-negative quadrant.
    pub const fn cell_index(self, width: usize) -> Option<usize> {
        if !self.is_cell() || self.row < 0 || self.col < 0 {
            return None;
        }
        let logical_row = (self.row / 2) as usize;
        let logical_col = (self.col / 2) as usize;
        Some(logical_row * width + logical_col)
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;
    use crate::spatial::direction::Direction;

    #[test]
    fn test_parity_classification() {
        assert!(Coordinate::new(0, 0).is_cell());
        assert!(Coordinate::new(2, 4).is_cell());
        assert!(Coordinate::new(0, 1).is_edge_slot());
        assert!(Coordinate::new(3, 2).is_edge_slot());
        assert!(!Coordinate::new(1, 1).is_cell());
        assert!(!Coordinate::new(1, 1).is_edge_slot());
    }

    #[test]
    fn test_step_moves_by_distance() {
        let origin = Coordinate::new(2, 2);
        assert_eq!(origin.step(Direction::East, 2), Coordinate::new(2, 4));
        assert_eq!(origin.step(Direction::North, 2), Coordinate::new(0, 2));
        assert_eq!(origin.step(Direction::West, 1), Coordinate::new(2, 1));
    }

    #[test]
    fn test_cell_index_row_major() {
        // 3 logical columns: (0,0) -> 0, (0,2) -> 1, (2,0) -> 3
        assert_eq!(Coordinate::new(0, 0).cell_index(3), Some(0));
        assert_eq!(Coordinate::new(0, 2).cell_index(3), Some(1));
        assert_eq!(Coordinate::new(2, 0).cell_index(3), Some(3));
        assert_eq!(Coordinate::new(0, 1).cell_index(3), None);
        assert_eq!(Coordinate::new(-2, 0).cell_index(3), None);
    }
}
