//! Extra edge injection on top of the spanning tree
//!
//! A spanning tree over N cells occupies exactly N - 1 edge slots. Every
//! remaining slot is a candidate wall that can be knocked out to close a
//! cycle in the final graph.

use crate::algorithm::sampler::RandomSelector;
use crate::io::error::{GenerationError, Result};
use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::DoubledGrid;

/// Collect every edge slot the spanning tree left unmarked
pub fn collect_absent_edges(grid: &DoubledGrid, edge_slots: &[Coordinate]) -> Vec<Coordinate> {
    edge_slots
        .iter()
        .copied()
        .filter(|&slot| !grid.is_marked(slot))
        .collect()
}

/// Mark `count` randomly chosen absent edge slots
///
/// Chosen slots leave `walls` by swapping in the last entry, so a slot
/// is drawn at most once per run.
///
/// # Errors
///
/// Returns an error when `count` exceeds the remaining absent slots.
pub fn inject_loops(
    grid: &mut DoubledGrid,
    walls: &mut Vec<Coordinate>,
    count: usize,
    selector: &mut RandomSelector,
) -> Result<()> {
    if count > walls.len() {
        return Err(GenerationError::InvalidLoopCount {
            requested: count,
            available: walls.len(),
        });
    }

    for _ in 0..count {
        let index = selector.pick_index(walls.len(), "loop placement")?;
        if index < walls.len() {
            let slot = walls.swap_remove(index);
            grid.mark(slot);
        }
    }

    Ok(())
}
