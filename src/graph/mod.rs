//! Graph-level views of a generated grid

/// Adjacency matrix derivation
pub mod adjacency;

pub use adjacency::derive_adjacency;
