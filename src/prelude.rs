// src/prelude.rs
//! The “everything” import for vecalg.
//!
//! Brings you the value types and the capability traits with one glob:
//! ```rust
//! use vecalg::prelude::*;
//! ```

// value types
pub use crate::complex::Complex;
pub use crate::polar::PolarVec2;
pub use crate::vec2::Vec2;
pub use crate::vec3::Vec3;
pub use crate::vector::Vector;

// capability traits and supporting types
pub use crate::error::VectorError;
pub use crate::traits::{Cross, IndexSet, Norm, VectorOps};
