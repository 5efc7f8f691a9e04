//! Spanning tree generation over rectangular grid graphs
//!
//! The generator owns every piece of mutable state behind a run. Each
//! call to [`GridGraphGenerator::generate_grid`] resets that state and
//! grows a fresh uniformly random spanning tree by repeated loop-erased
//! random walks, then optionally knocks out extra walls to close cycles.

use crate::{
    algorithm::loops::{collect_absent_edges, inject_loops},
    algorithm::membership::CellSet,
    algorithm::pool::CellPool,
    algorithm::sampler::RandomSelector,
    algorithm::walk::{commit_path, random_walk},
    graph::adjacency::derive_adjacency,
    io::error::{GenerationError, Result},
    io::render::render_grid,
    spatial::coordinate::Coordinate,
    spatial::direction::Direction,
    spatial::grid::DoubledGrid,
};
use ndarray::Array2;
use std::collections::HashMap;

/// Uniform spanning tree generator for a rectangular grid of cells
///
/// Holds the doubled grid, the visited and unvisited cell bookkeeping,
/// and the seeded random selector. All dimension and loop-count
/// validation happens at construction, so a built generator can always
/// run.
pub struct GridGraphGenerator {
    actual_height: usize,
    actual_width: usize,
    extra_edges: usize,
    cell_count: usize,
    grid: DoubledGrid,
    visited: CellSet,
    unvisited: CellPool,
    path: HashMap<Coordinate, Direction>,
    edge_slots: Vec<Coordinate>,
    selector: RandomSelector,
    generated: bool,
}

impl GridGraphGenerator {
    /// Create a generator seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is below one cell, or if
    /// `extra_edges` exceeds the edge slots a spanning tree leaves
    /// absent.
    pub fn new(height: usize, width: usize, extra_edges: usize) -> Result<Self> {
        Self::build(height, width, extra_edges, RandomSelector::from_entropy())
    }

    /// Create a generator with a fixed seed for reproducible output
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is below one cell, or if
    /// `extra_edges` exceeds the edge slots a spanning tree leaves
    /// absent.
    pub fn seeded(height: usize, width: usize, extra_edges: usize, seed: u64) -> Result<Self> {
        Self::build(height, width, extra_edges, RandomSelector::new(seed))
    }

    fn build(
        height: usize,
        width: usize,
        extra_edges: usize,
        selector: RandomSelector,
    ) -> Result<Self> {
        if height < 1 {
            return Err(GenerationError::InvalidDimension {
                axis: "height",
                value: height,
            });
        }
        if width < 1 {
            return Err(GenerationError::InvalidDimension {
                axis: "width",
                value: width,
            });
        }

        // A tree over N cells occupies N - 1 of the h*(w-1) + w*(h-1)
        // slots, leaving (h-1)*(w-1) available for extra edges
        let cell_count = height * width;
        let total_slots = height * (width - 1) + width * (height - 1);
        let available = total_slots - (cell_count - 1);
        if extra_edges > available {
            return Err(GenerationError::InvalidLoopCount {
                requested: extra_edges,
                available,
            });
        }

        let mut generator = Self {
            actual_height: height,
            actual_width: width,
            extra_edges,
            cell_count,
            grid: DoubledGrid::new(height, width),
            visited: CellSet::new(cell_count),
            unvisited: CellPool::with_capacity(cell_count),
            path: HashMap::new(),
            edge_slots: Vec::new(),
            selector,
            generated: false,
        };
        generator.initialize();

        Ok(generator)
    }

    /// Reset all run state so a generation starts from a blank grid
    fn initialize(&mut self) {
        self.grid.clear();
        self.visited.clear();
        self.unvisited.fill(self.grid.cell_coordinates());
        self.edge_slots = self.grid.edge_coordinates();
        self.path.clear();
        self.generated = false;
    }

    /// Absorb the tree root without crossing an edge
    fn absorb_root(&mut self, root: Coordinate) {
        if let Some(index) = root.cell_index(self.actual_width) {
            self.visited.insert(index);
        }
        self.grid.mark(root);
    }

    /// Generate a fresh uniformly random spanning tree
    ///
    /// Picks a random root, then repeatedly walks from a random
    /// unvisited cell until the walk touches the tree and commits the
    /// loop-erased path. Once every cell is absorbed, the configured
    /// number of extra edges is knocked into randomly chosen absent
    /// slots. Calling this again discards the previous tree and draws a
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns an error when a random draw is requested over an empty
    /// pool, or when the extra edge count no longer fits the absent
    /// slots.
    pub fn generate_grid(&mut self) -> Result<&DoubledGrid> {
        self.initialize();

        let root_index = self
            .selector
            .pick_index(self.unvisited.len(), "root selection")?;
        let Some(root) = self.unvisited.take(root_index) else {
            return Err(GenerationError::ExhaustedRandomSource {
                operation: "root selection",
            });
        };
        self.absorb_root(root);

        while !self.unvisited.is_empty() {
            let start_index = self
                .selector
                .pick_index(self.unvisited.len(), "walk start")?;
            let Some(start) = self.unvisited.peek(start_index) else {
                return Err(GenerationError::ExhaustedRandomSource {
                    operation: "walk start",
                });
            };

            random_walk(
                &self.grid,
                &self.visited,
                &mut self.path,
                start,
                &mut self.selector,
                self.actual_width,
            );
            commit_path(
                &mut self.grid,
                &mut self.visited,
                &mut self.unvisited,
                &mut self.path,
                start,
                self.actual_width,
            );
        }

        if self.extra_edges > 0 {
            let mut walls = collect_absent_edges(&self.grid, &self.edge_slots);
            inject_loops(
                &mut self.grid,
                &mut walls,
                self.extra_edges,
                &mut self.selector,
            )?;
        }

        self.generated = true;
        Ok(&self.grid)
    }

    /// Generate a fresh graph and derive its cell adjacency matrix
    ///
    /// Every call runs a full [`GridGraphGenerator::generate_grid`]
    /// pass first, so the returned matrix always describes a newly
    /// drawn graph. The matrix is `cell_count` by `cell_count` with
    /// flat row-major cell indices, symmetric, and false on the
    /// diagonal. To export the grid currently held without drawing a
    /// new one, pass [`Self::grid`] to [`derive_adjacency`] directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the generation run fails.
    pub fn generate_adjacency(&mut self) -> Result<Array2<bool>> {
        self.generate_grid()?;

        Ok(derive_adjacency(
            &self.grid,
            self.actual_height,
            self.actual_width,
        ))
    }

    /// Render the current doubled grid as a text diagram
    pub fn render(&self) -> String {
        render_grid(&self.grid)
    }

    /// Access the doubled grid in its current state
    pub const fn grid(&self) -> &DoubledGrid {
        &self.grid
    }

    /// Whether a completed tree is currently held
    pub const fn is_generated(&self) -> bool {
        self.generated
    }

    /// Logical grid height in cells
    pub const fn actual_height(&self) -> usize {
        self.actual_height
    }

    /// Logical grid width in cells
    pub const fn actual_width(&self) -> usize {
        self.actual_width
    }

    /// Number of extra edges added after tree construction
    pub const fn extra_edges(&self) -> usize {
        self.extra_edges
    }

    /// Total number of logical cells
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Number of cells absorbed into the current tree
    pub fn visited_cells(&self) -> usize {
        self.visited.count()
    }

    /// Number of cells still waiting in the pool
    pub fn unvisited_cells(&self) -> usize {
        self.unvisited.len()
    }
}
