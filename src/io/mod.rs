//! Output surfaces and error handling

/// Error types shared across generation
pub mod error;
/// Text diagrams of the doubled grid
pub mod render;

pub use error::{GenerationError, Result};
