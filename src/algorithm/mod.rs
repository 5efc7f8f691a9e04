//! Core spanning tree construction
//!
//! This module contains the generation algorithm including:
//! - The top-level grid graph generator
//! - Loop-erased random walk primitives
//! - Cell bookkeeping and seeded random draws

/// Top-level generator driving full runs
pub mod generator;
/// Extra edge injection over the finished tree
pub mod loops;
/// Visited-cell membership tracking
pub mod membership;
/// Unvisited cell pool with swap removal
pub mod pool;
/// Seeded random selection
pub mod sampler;
/// Random walk and path commit steps
pub mod walk;

pub use generator::GridGraphGenerator;
pub use sampler::RandomSelector;
