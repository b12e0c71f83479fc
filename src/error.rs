// src/error.rs
//! Failure taxonomy for construction and dimension-checked operations.

use thiserror::Error;

/// Errors surfaced by fallible vector operations.
///
/// None of these are retried internally; an operation either succeeds with a
/// validated result or fails before mutating any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A fixed-dimension type was built from the wrong number of components.
    #[error("expected {expected} components, got {got}")]
    ArgumentCount { expected: usize, got: usize },

    /// A binary operation received operands of differing dimensions.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A component index outside `[0, dim)`.
    #[error("index {index} out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },
}
