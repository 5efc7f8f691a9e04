//! Spatial data structures for the doubled grid
//!
//! This module contains spatial-related functionality including:
//! - Cardinal step directions
//! - Signed doubled-grid coordinates
//! - The boolean doubled grid itself

/// Signed coordinates with parity classification
pub mod coordinate;
/// Cardinal directions and their offsets
pub mod direction;
/// Doubled grid storage and bounds checking
pub mod grid;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use grid::DoubledGrid;
