//! Error types for grid graph generation

use std::fmt;

/// Main error type for all generation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Grid dimensions must span at least one cell in each direction
    InvalidDimension {
        /// Which dimension failed validation
        axis: &'static str,
        /// The rejected value
        value: usize,
    },

    /// Requested extra edges exceed the slots left absent by the spanning tree
    ///
    /// A spanning tree over N cells always occupies exactly N - 1 edge
    /// slots, so the number of slots still absent after tree construction
    /// is fixed once the dimensions are known.
    InvalidLoopCount {
        /// Number of extra edges requested
        requested: usize,
        /// Number of absent edge slots available
        available: usize,
    },

    /// The random source could not produce a value for the requested draw
    ExhaustedRandomSource {
        /// Draw that failed
        operation: &'static str,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { axis, value } => {
                write!(f, "Invalid {axis} {value}: grid dimensions must be at least 1")
            }
            Self::InvalidLoopCount {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Cannot add {requested} extra edges: only {available} edge slots are absent after tree construction"
                )
            }
            Self::ExhaustedRandomSource { operation } => {
                write!(f, "Random source exhausted during {operation}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;
