//! # vecalg Quickstart
//!
//! ```rust
//! use vecalg::prelude::*;
//!
//! // A displacement on the plane, round-tripped through polar form
//! let v = Vec2::new(3.0, 4.0);
//! let p = v.to_polar();
//! assert!((p.radius() - 5.0).abs() < 1e-12);
//!
//! let back = p.to_cartesian();
//! assert!((back.x - 3.0).abs() < 1e-12);
//! assert!((back.y - 4.0).abs() < 1e-12);
//!
//! // Complex arithmetic rides on the same plane
//! let z = Complex::new(3.0, 4.0) * Complex::new(1.0, 0.0);
//! assert_eq!(z, Complex::new(3.0, 4.0));
//! ```

// Core modules
pub mod complex;
pub mod error;
pub mod polar;
pub mod prelude;
pub mod traits;
pub mod vec2;
pub mod vec3;
pub mod vector;

// --- Public API exports ---

pub use complex::Complex;
pub use error::VectorError;
pub use polar::PolarVec2;
pub use traits::{Cross, IndexSet, Norm, VectorOps};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vector::Vector;

/// Tolerance used by `equals` and `is_normal` comparisons.
pub const EPSILON: f64 = f64::EPSILON;
