//! Uniform spanning tree generation over rectangular grid graphs using loop-erased random walks
//!
//! Trees grow on a doubled boolean grid where even positions are logical cells
//! and odd positions are the edge slots between them. A finished run can carry
//! extra cycle-closing edges, export a cell adjacency matrix, or render as a
//! text diagram.

#![forbid(unsafe_code)]

/// Core spanning tree construction, random walks, and cell bookkeeping
pub mod algorithm;
/// Graph-level views derived from a generated grid
pub mod graph;
/// Error handling and text output
pub mod io;
/// Doubled grid storage, coordinates, and directions
pub mod spatial;

pub use algorithm::generator::GridGraphGenerator;
pub use io::error::{GenerationError, Result};
