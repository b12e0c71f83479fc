// src/vec2.rs
//! 2-component Cartesian vector on the plane.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::VectorError;
use crate::polar::PolarVec2;
use crate::traits::{Cross, Norm, VectorOps};
use crate::vector::Vector;
use crate::EPSILON;

/// A 2-D Euclidean vector.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// Create a new `Vec2` from components.
    #[inline(always)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from a flattened slice of exactly two components.
    pub fn from_slice(components: &[f64]) -> Result<Self, VectorError> {
        match components {
            &[x, y] => Ok(Self::new(x, y)),
            _ => Err(VectorError::ArgumentCount {
                expected: 2,
                got: components.len(),
            }),
        }
    }

    /// Polar form of this vector: `radius = norm`, `angle = atan2(y, x)`.
    ///
    /// The angle comes out canonicalized into `[0, 2π)`; the zero vector
    /// maps to angle 0.
    pub fn to_polar(&self) -> PolarVec2 {
        PolarVec2::new(self.norm(), self.y.atan2(self.x))
    }

    /// Cartesian form of a polar vector: `x = r·cos(θ)`, `y = r·sin(θ)`.
    pub fn from_polar(p: &PolarVec2) -> Self {
        Self::new(p.radius() * p.angle().cos(), p.radius() * p.angle().sin())
    }
}

impl VectorOps for Vec2 {
    fn to_array(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }

    #[inline(always)]
    fn opposite(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[inline(always)]
    fn scalar(&self, n: f64) -> Self {
        Self::new(self.x * n, self.y * n)
    }

    #[inline(always)]
    fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline(always)]
    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    fn norm_l(&self, l: Norm) -> f64 {
        match l {
            Norm::L1 => self.x.abs() + self.y.abs(),
            Norm::L2 => self.dot(self).sqrt(),
        }
    }

    fn equals(&self, other: &Self) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }
}

impl Cross for Vec2 {
    type Output = f64;

    /// Signed area of the parallelogram spanned by the two vectors;
    /// positive when `other` is counter-clockwise from `self`.
    #[inline(always)]
    fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(arr: [f64; 2]) -> Vec2 {
        Vec2::new(arr[0], arr[1])
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> [f64; 2] {
        [v.x, v.y]
    }
}

impl From<PolarVec2> for Vec2 {
    fn from(p: PolarVec2) -> Vec2 {
        Vec2::from_polar(&p)
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Vector {
        Vector::new(vec![v.x, v.y])
    }
}

impl TryFrom<&Vector> for Vec2 {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<Vec2, VectorError> {
        Vec2::from_slice(v.components())
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vec2([{}, {}])", self.x, self.y)
    }
}
