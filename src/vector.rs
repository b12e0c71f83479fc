// src/vector.rs
//! Arbitrary-dimension vector with runtime dimension checks.
//!
//! This is the base container the fixed-dimension types bridge to. Binary
//! operations are fallible: mixing dimensions is a caller error surfaced as
//! [`VectorError::DimensionMismatch`].

use std::fmt;

use crate::error::VectorError;
use crate::traits::{IndexSet, Norm};
use crate::EPSILON;

/// An n-dimensional vector over `f64`.
///
/// No meaning is attached to component indices; dimension is simply the
/// component count.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Construct from components.
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Vector of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self { components: vec![0.0; n] }
    }

    /// Vector of `n` ones.
    pub fn ones(n: usize) -> Self {
        Self { components: vec![1.0; n] }
    }

    /// Number of components.
    #[inline]
    pub fn size(&self) -> usize {
        self.components.len()
    }

    /// Borrow the components.
    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Flattened components, in order.
    pub fn to_array(&self) -> Vec<f64> {
        self.components.clone()
    }

    /// Replace all components at once; the dimension may change.
    pub fn set_components(&mut self, components: Vec<f64>) {
        self.components = components;
    }

    /// Concatenation of this vector's components and `other`'s.
    pub fn combine(&self, other: &Vector) -> Vector {
        let mut components = self.components.clone();
        components.extend_from_slice(&other.components);
        Vector { components }
    }

    fn check_dim(&self, other: &Vector) -> Result<(), VectorError> {
        if self.size() != other.size() {
            return Err(VectorError::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    /// Point reflection through the origin.
    pub fn opposite(&self) -> Vector {
        Vector {
            components: self.components.iter().map(|c| -c).collect(),
        }
    }

    /// In-place [`Vector::opposite`].
    pub fn opposite_mut(&mut self) -> &mut Self {
        for c in &mut self.components {
            *c = -*c;
        }
        self
    }

    /// Componentwise sum.
    pub fn add(&self, v: &Vector) -> Result<Vector, VectorError> {
        self.check_dim(v)?;
        Ok(Vector {
            components: self
                .components
                .iter()
                .zip(&v.components)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// In-place [`Vector::add`].
    pub fn add_mut(&mut self, v: &Vector) -> Result<&mut Self, VectorError> {
        self.check_dim(v)?;
        for (a, b) in self.components.iter_mut().zip(&v.components) {
            *a += b;
        }
        Ok(self)
    }

    /// Componentwise difference.
    pub fn sub(&self, v: &Vector) -> Result<Vector, VectorError> {
        self.add(&v.opposite())
    }

    /// In-place [`Vector::sub`].
    pub fn sub_mut(&mut self, v: &Vector) -> Result<&mut Self, VectorError> {
        self.add_mut(&v.opposite())
    }

    /// Scale by `n`.
    pub fn scalar(&self, n: f64) -> Vector {
        Vector {
            components: self.components.iter().map(|c| c * n).collect(),
        }
    }

    /// In-place [`Vector::scalar`].
    pub fn scalar_mut(&mut self, n: f64) -> &mut Self {
        for c in &mut self.components {
            *c *= n;
        }
        self
    }

    /// Dot product.
    pub fn dot(&self, v: &Vector) -> Result<f64, VectorError> {
        self.check_dim(v)?;
        Ok(self
            .components
            .iter()
            .zip(&v.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Norm of the requested order.
    pub fn norm(&self, l: Norm) -> f64 {
        match l {
            Norm::L1 => self.components.iter().map(|c| c.abs()).sum(),
            Norm::L2 => self.components.iter().map(|c| c * c).sum::<f64>().sqrt(),
        }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.norm(Norm::L2)
    }

    /// Scale so that the Euclidean length equals one.
    ///
    /// A zero vector yields non-finite components rather than an error.
    pub fn normalize(&self) -> Vector {
        self.scalar(1.0 / self.length())
    }

    /// In-place [`Vector::normalize`].
    pub fn normalize_mut(&mut self) -> &mut Self {
        let n = self.length();
        self.scalar_mut(1.0 / n)
    }

    /// Componentwise equality within [`EPSILON`].
    pub fn equals(&self, v: &Vector) -> Result<bool, VectorError> {
        self.check_dim(v)?;
        Ok(self
            .components
            .iter()
            .zip(&v.components)
            .all(|(a, b)| (a - b).abs() <= EPSILON))
    }

    /// True when the two vectors are perpendicular.
    pub fn is_normal(&self, v: &Vector) -> Result<bool, VectorError> {
        Ok(self.dot(v)?.abs() < EPSILON)
    }
}

impl IndexSet for Vector {
    fn set(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        if index >= self.size() {
            return Err(VectorError::IndexOutOfRange {
                index,
                dim: self.size(),
            });
        }
        self.components[index] = value;
        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Vector {
        Vector::new(components)
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Vector {
        Vector::new(components.to_vec())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector([")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "])")
    }
}
