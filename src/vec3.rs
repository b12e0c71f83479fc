// src/vec3.rs
//! 3-component Cartesian vector in space.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::VectorError;
use crate::traits::{Cross, Norm, VectorOps};
use crate::vector::Vector;
use crate::EPSILON;

/// A 3-D Euclidean vector.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new `Vec3` from components.
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build from a flattened slice of exactly three components.
    pub fn from_slice(components: &[f64]) -> Result<Self, VectorError> {
        match components {
            &[x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::ArgumentCount {
                expected: 3,
                got: components.len(),
            }),
        }
    }
}

impl VectorOps for Vec3 {
    fn to_array(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    #[inline(always)]
    fn opposite(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    #[inline(always)]
    fn scalar(&self, n: f64) -> Self {
        Self::new(self.x * n, self.y * n, self.z * n)
    }

    #[inline(always)]
    fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline(always)]
    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn norm_l(&self, l: Norm) -> f64 {
        match l {
            Norm::L1 => self.x.abs() + self.y.abs() + self.z.abs(),
            Norm::L2 => self.dot(self).sqrt(),
        }
    }

    fn equals(&self, other: &Self) -> bool {
        (self.x - other.x).abs() <= EPSILON
            && (self.y - other.y).abs() <= EPSILON
            && (self.z - other.z).abs() <= EPSILON
    }
}

impl Cross for Vec3 {
    type Output = Vec3;

    /// Standard 3-D cross product.
    #[inline(always)]
    fn cross(&self, other: &Self) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Vector {
        Vector::new(vec![v.x, v.y, v.z])
    }
}

impl TryFrom<&Vector> for Vec3 {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<Vec3, VectorError> {
        Vec3::from_slice(v.components())
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vec3([{}, {}, {}])", self.x, self.y, self.z)
    }
}
