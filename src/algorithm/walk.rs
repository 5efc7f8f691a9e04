//! Loop-erased random walk primitives
//!
//! A walk wanders from an unvisited start cell until it touches the
//! growing tree. Recording one outgoing direction per cell and
//! overwriting it on revisit erases loops as they form, so the surviving
//! direction chain is always a simple path into the tree.

use std::collections::HashMap;

use crate::algorithm::membership::CellSet;
use crate::algorithm::pool::CellPool;
use crate::algorithm::sampler::RandomSelector;
use crate::spatial::coordinate::Coordinate;
use crate::spatial::direction::Direction;
use crate::spatial::grid::DoubledGrid;

/// Walk from `start` until a visited cell is reached
///
/// Each step draws directions until one stays inside the grid, records
/// the final choice for the departing cell, and advances two doubled
/// units to the neighboring cell. Runs until the walk lands on a cell
/// already in `visited`, which happens with probability one whenever the
/// tree is non-empty.
pub fn random_walk(
    grid: &DoubledGrid,
    visited: &CellSet,
    path: &mut HashMap<Coordinate, Direction>,
    start: Coordinate,
    selector: &mut RandomSelector,
    width: usize,
) {
    let mut current = start;
    loop {
        // Any grid with two or more cells leaves every cell at least one valid direction
        let mut direction = selector.direction();
        while !grid.is_valid_step(current, direction) {
            direction = selector.direction();
        }

        path.insert(current, direction);
        current = current.step(direction, 2);

        if current
            .cell_index(width)
            .is_some_and(|index| visited.contains(index))
        {
            break;
        }
    }
}

/// Commit the loop-erased path from `start` into the tree
///
/// Follows the surviving direction chain, marking each cell and the edge
/// slot it crosses, until the chain joins a visited cell. Committed
/// cells move from the unvisited pool into the visited set. The path map
/// is drained afterwards so the next walk starts clean.
pub fn commit_path(
    grid: &mut DoubledGrid,
    visited: &mut CellSet,
    unvisited: &mut CellPool,
    path: &mut HashMap<Coordinate, Direction>,
    start: Coordinate,
    width: usize,
) {
    let mut current = start;
    loop {
        if let Some(index) = current.cell_index(width) {
            if visited.contains(index) {
                break;
            }
            visited.insert(index);
        }
        unvisited.remove(current);
        grid.mark(current);

        let Some(direction) = path.get(&current).copied() else {
            break;
        };

        grid.mark(current.step(direction, 1));
        current = current.step(direction, 2);
    }

    path.clear();
}
