// src/traits.rs
//! Capability traits for the fixed-dimension vector types.
//!
//! The operation set is split by what a representation can actually do:
//! [`VectorOps`] for the shared algebra, [`Cross`] for the types that have a
//! cross product, and [`IndexSet`] for runtime-indexed component assignment.

use crate::error::VectorError;
use crate::EPSILON;

/// Selects the norm computed by [`VectorOps::norm_l`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Norm {
    /// Manhattan norm: sum of absolute components.
    L1,
    /// Euclidean norm.
    L2,
}

/// Core algebra shared by every fixed-dimension vector representation.
///
/// Every operation returns a fresh value; the `*_mut` variants mutate the
/// receiver in place and return it for chaining.
pub trait VectorOps: Clone {
    /// Flattened components in fixed order.
    fn to_array(&self) -> Vec<f64>;

    /// Point reflection through the origin.
    fn opposite(&self) -> Self;

    /// Scale by `n`.
    fn scalar(&self, n: f64) -> Self;

    /// Sum of this vector and `other`.
    fn add(&self, other: &Self) -> Self;

    /// Difference of this vector and `other`.
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.opposite())
    }

    /// Dot product.
    fn dot(&self, other: &Self) -> f64;

    /// Norm of the requested order.
    fn norm_l(&self, l: Norm) -> f64;

    /// Euclidean length.
    fn norm(&self) -> f64 {
        self.norm_l(Norm::L2)
    }

    /// Scale so that the Euclidean length equals one.
    ///
    /// The zero vector has no direction: its components come out non-finite
    /// rather than raising an error.
    fn normalize(&self) -> Self {
        self.scalar(1.0 / self.norm())
    }

    /// Componentwise equality within [`EPSILON`].
    fn equals(&self, other: &Self) -> bool;

    /// True when the two directions are perpendicular.
    fn is_normal(&self, other: &Self) -> bool {
        self.dot(other).abs() < EPSILON
    }

    /// In-place [`VectorOps::add`].
    fn add_mut(&mut self, other: &Self) -> &mut Self
    where
        Self: Sized,
    {
        *self = self.add(other);
        self
    }

    /// In-place [`VectorOps::sub`].
    fn sub_mut(&mut self, other: &Self) -> &mut Self
    where
        Self: Sized,
    {
        *self = self.sub(other);
        self
    }

    /// In-place [`VectorOps::scalar`].
    fn scalar_mut(&mut self, n: f64) -> &mut Self
    where
        Self: Sized,
    {
        *self = self.scalar(n);
        self
    }

    /// In-place [`VectorOps::opposite`].
    fn opposite_mut(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        *self = self.opposite();
        self
    }

    /// In-place [`VectorOps::normalize`].
    fn normalize_mut(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        *self = self.normalize();
        self
    }
}

/// Cross product, for the representations where one exists.
///
/// On the plane the product is the scalar z-component of the 3-D cross of
/// the two embedded vectors; in space it is a vector.
pub trait Cross {
    /// Result of the product: `f64` on the plane, `Self` in space.
    type Output;

    /// Cross product of `self` and `other`.
    fn cross(&self, other: &Self) -> Self::Output;
}

/// Runtime-indexed component assignment, for the dynamically sized type.
pub trait IndexSet {
    /// Set component `index` to `value`.
    fn set(&mut self, index: usize, value: f64) -> Result<(), VectorError>;
}
